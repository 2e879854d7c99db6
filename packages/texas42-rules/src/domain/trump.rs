//! Trump logic: which suits a domino occupies under a trump, and how trump
//! dominoes rank against each other.

use std::cmp::Ordering;

use serde::Serialize;

use super::dominoes_types::{Domino, DominoSuit};
use crate::domain::rules::TRUMP_DOUBLE_RANK;

const PIP_SUITS: [DominoSuit; 7] = [
    DominoSuit::Blanks,
    DominoSuit::Ones,
    DominoSuit::Twos,
    DominoSuit::Threes,
    DominoSuit::Fours,
    DominoSuit::Fives,
    DominoSuit::Sixes,
];

// Domino pips are always 0..=6, so indexing cannot go out of bounds.
fn pip_suit(pip: u8) -> DominoSuit {
    PIP_SUITS[pip as usize]
}

/// Suits `domino` occupies while `trump` is in force.
///
/// - `doubles` trump: a double is only `doubles`; a non-double occupies both
///   of its pip suits, higher pip first.
/// - pip trump: anything carrying the trump pip is `{trump}` only (a trump
///   double included); other doubles are their own pip suit; every other
///   domino is the suit of its higher pip.
pub fn suits_of(domino: &Domino, trump: DominoSuit) -> Vec<DominoSuit> {
    match trump.pip() {
        None if domino.is_double() => vec![DominoSuit::Doubles],
        None => vec![pip_suit(domino.high()), pip_suit(domino.low())],
        Some(t) if domino.has_pip(t) => vec![trump],
        Some(_) => vec![pip_suit(domino.high())],
    }
}

/// True when `domino` occupies `suit` under `trump`.
pub fn occupies(domino: &Domino, suit: DominoSuit, trump: DominoSuit) -> bool {
    suits_of(domino, trump).contains(&suit)
}

pub fn is_trump(domino: &Domino, trump: DominoSuit) -> bool {
    occupies(domino, trump, trump)
}

pub fn hand_has_suit(hand: &[Domino], suit: DominoSuit, trump: DominoSuit) -> bool {
    hand.iter().any(|d| occupies(d, suit, trump))
}

/// Rank of a trump domino; `None` when it is not trump.
///
/// Under `doubles` the rank is the shared pip, so 6-6 is highest. Under a pip
/// trump the trump double ranks 7, above every other trump, which rank by
/// their non-trump end (trump paired with 6 beats trump paired with 0).
pub fn trump_rank(domino: &Domino, trump: DominoSuit) -> Option<u8> {
    if !is_trump(domino, trump) {
        return None;
    }
    match trump.pip() {
        None => Some(domino.high()),
        Some(_) if domino.is_double() => Some(TRUMP_DOUBLE_RANK),
        Some(t) => domino.other_end(t),
    }
}

/// Strength of `a` against `b` under `trump`; `Greater` means `a` is
/// stronger.
///
/// Trump beats non-trump and trump compares by [`trump_rank`]. Two non-trump
/// dominoes compare by plain high-then-low order; lead-suit following is the
/// trick evaluator's business, not this function's.
pub fn compare(a: &Domino, b: &Domino, trump: DominoSuit) -> Ordering {
    match (trump_rank(a, trump), trump_rank(b, trump)) {
        (Some(ra), Some(rb)) => ra.cmp(&rb),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => a.cmp(b),
    }
}

/// Membership check against the eight canonical suit symbols.
pub fn is_valid_trump_suit(value: &str) -> bool {
    value.parse::<DominoSuit>().is_ok()
}

/// Trump dominoes of a set, strongest first. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrumpHierarchy {
    pub suit: DominoSuit,
    pub ranked_dominoes: Vec<Domino>,
    pub trump_count: usize,
}

impl TrumpHierarchy {
    pub fn strongest(&self) -> Option<&Domino> {
        self.ranked_dominoes.first()
    }

    /// 0-based position of `domino` in the ranking.
    pub fn position_of(&self, domino: &Domino) -> Option<usize> {
        self.ranked_dominoes.iter().position(|d| d == domino)
    }
}

pub fn hierarchy(trump: DominoSuit, dominoes: &[Domino]) -> TrumpHierarchy {
    let mut ranked: Vec<Domino> = dominoes
        .iter()
        .copied()
        .filter(|d| is_trump(d, trump))
        .collect();
    ranked.sort_by(|a, b| compare(b, a, trump));
    TrumpHierarchy {
        suit: trump,
        trump_count: ranked.len(),
        ranked_dominoes: ranked,
    }
}
