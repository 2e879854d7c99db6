//! The canonical double-six set.

use serde::Serialize;

use super::dominoes_types::Domino;
use crate::domain::rules::{MAX_PIP, SET_SIZE, TOTAL_COUNT_POINTS};

/// A generated set together with its self-check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DominoSet {
    pub dominoes: Vec<Domino>,
    pub total_points: u32,
    /// Exactly 28 pieces and 35 count points.
    pub is_valid: bool,
}

/// Enumerate every `(high, low)` with `low <= high <= 6`, ordered by high
/// then low.
pub fn make_full_set() -> DominoSet {
    let mut dominoes = Vec::with_capacity(SET_SIZE);
    for high in 0..=MAX_PIP {
        for low in 0..=high {
            dominoes.push(Domino::canonical(high, low));
        }
    }
    let total_points = dominoes.iter().map(|d| d.point_value() as u32).sum();
    let is_valid = dominoes.len() == SET_SIZE && total_points == TOTAL_COUNT_POINTS;
    DominoSet {
        dominoes,
        total_points,
        is_valid,
    }
}
