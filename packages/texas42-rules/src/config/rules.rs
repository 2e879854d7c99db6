//! Rules configuration handling.
//!
//! The orchestrator stores per-table options as JSON; this module gives them a
//! typed shape with defaults matching a standard four-player Texas 42 table.
//!
//! # Example JSON Config
//!
//! ```json
//! {"player_count": 4, "allow_special_contracts": false}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::domain::rules::{DEFAULT_PLAYERS, MAX_PLAYERS, MIN_PLAYERS};
use crate::errors::domain::DomainError;

/// Per-table rule options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Seats at the table. Drives the all-pass threshold, trick completion
    /// and dealing.
    pub player_count: usize,

    /// When `false`, nello, plunge, sevens and follow-me bids are rejected
    /// with `INVALID_SPECIAL_CONTRACT`.
    pub allow_special_contracts: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            player_count: DEFAULT_PLAYERS,
            allow_special_contracts: true,
        }
    }
}

impl RulesConfig {
    /// Create a RulesConfig from an optional JSON value.
    ///
    /// Missing fields take their defaults; a value that fails to deserialize
    /// yields the default config.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        match config {
            Some(json) => serde_json::from_value(json.clone()).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "malformed rules config; using defaults");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn with_player_count(mut self, player_count: usize) -> Self {
        self.player_count = player_count;
        self
    }

    pub fn without_special_contracts(mut self) -> Self {
        self.allow_special_contracts = false;
        self
    }

    /// Reject configurations the engine cannot evaluate.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(DomainError::config(format!(
                "player_count must be {MIN_PLAYERS}..={MAX_PLAYERS}, got {}",
                self.player_count
            )));
        }
        Ok(())
    }
}
