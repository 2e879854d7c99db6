//! Domain-level error type used across the engine.
//!
//! Two families are kept apart:
//! - [`DomainError::Validation`] is a rule violation (a player tried an
//!   illegal action). It is an expected outcome and is relayed to the user.
//! - [`DomainError::Structural`] and [`DomainError::Config`] mean the caller
//!   handed the engine malformed data. They indicate a programming error.

use thiserror::Error;

use super::error_code::ErrorCode;

/// Game-rule violations, one per rejection code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationKind {
    BiddingComplete,
    NotCurrentBidder,
    BidTooLow,
    BidTooHigh,
    InvalidTrumpSuit,
    BidNotHigher,
    InvalidSpecialContract,
    MissingTrump,
    MarksMismatch,
    MustFollowSuit,
    DominoNotInHand,
    OutOfTurn,
    TrickComplete,
    EmptyTrick,
}

impl ValidationKind {
    pub const fn code(self) -> ErrorCode {
        match self {
            Self::BiddingComplete => ErrorCode::BiddingComplete,
            Self::NotCurrentBidder => ErrorCode::NotCurrentBidder,
            Self::BidTooLow => ErrorCode::BidTooLow,
            Self::BidTooHigh => ErrorCode::BidTooHigh,
            Self::InvalidTrumpSuit => ErrorCode::InvalidTrumpSuit,
            Self::BidNotHigher => ErrorCode::BidNotHigher,
            Self::InvalidSpecialContract => ErrorCode::InvalidSpecialContract,
            Self::MissingTrump => ErrorCode::MissingTrump,
            Self::MarksMismatch => ErrorCode::MarksMismatch,
            Self::MustFollowSuit => ErrorCode::MustFollowSuit,
            Self::DominoNotInHand => ErrorCode::DominoNotInHand,
            Self::OutOfTurn => ErrorCode::OutOfTurn,
            Self::TrickComplete => ErrorCode::TrickComplete,
            Self::EmptyTrick => ErrorCode::EmptyTrick,
        }
    }
}

/// Construction and parsing failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructuralKind {
    InvalidDomino,
    ParseDomino,
    ParseSuit,
    ParseContract,
}

impl StructuralKind {
    pub const fn code(self) -> ErrorCode {
        match self {
            Self::InvalidDomino => ErrorCode::InvalidDomino,
            Self::ParseDomino => ErrorCode::ParseDomino,
            Self::ParseSuit => ErrorCode::ParseSuit,
            Self::ParseContract => ErrorCode::ParseContract,
        }
    }
}

/// Central engine error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Business rule violation
    #[error("validation error {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Malformed domino, suit or contract data
    #[error("invalid input {0:?}: {1}")]
    Structural(StructuralKind, String),
    /// Unusable table configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn structural(kind: StructuralKind, detail: impl Into<String>) -> Self {
        Self::Structural(kind, detail.into())
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config(detail.into())
    }

    /// Stable code for this error, as relayed to collaborators.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(kind, _) => kind.code(),
            Self::Structural(kind, _) => kind.code(),
            Self::Config(_) => ErrorCode::ConfigError,
        }
    }

    /// Human-readable detail without the kind prefix.
    pub fn detail(&self) -> &str {
        match self {
            Self::Validation(_, d) | Self::Structural(_, d) | Self::Config(d) => d,
        }
    }

    /// True for rule violations a player can recover from by choosing again.
    pub fn is_rule_violation(&self) -> bool {
        matches!(self, Self::Validation(..))
    }
}
