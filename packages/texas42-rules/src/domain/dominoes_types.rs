//! Core domino types: Domino, DominoSuit, and the point model

use crate::domain::rules::MAX_PIP;
use crate::errors::domain::{DomainError, StructuralKind};

/// The eight suits a domino can occupy.
///
/// The seven pip suits map 1:1 to pip values 0..=6. `Doubles` has no pip
/// value and only exists as a trump declaration.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum DominoSuit {
    Blanks,
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    Doubles,
}

impl DominoSuit {
    pub const ALL: [DominoSuit; 8] = [
        DominoSuit::Blanks,
        DominoSuit::Ones,
        DominoSuit::Twos,
        DominoSuit::Threes,
        DominoSuit::Fours,
        DominoSuit::Fives,
        DominoSuit::Sixes,
        DominoSuit::Doubles,
    ];

    /// Pip value of a pip suit; `None` for `Doubles`.
    pub const fn pip(self) -> Option<u8> {
        match self {
            DominoSuit::Blanks => Some(0),
            DominoSuit::Ones => Some(1),
            DominoSuit::Twos => Some(2),
            DominoSuit::Threes => Some(3),
            DominoSuit::Fours => Some(4),
            DominoSuit::Fives => Some(5),
            DominoSuit::Sixes => Some(6),
            DominoSuit::Doubles => None,
        }
    }

    pub const fn from_pip(pip: u8) -> Option<Self> {
        match pip {
            0 => Some(DominoSuit::Blanks),
            1 => Some(DominoSuit::Ones),
            2 => Some(DominoSuit::Twos),
            3 => Some(DominoSuit::Threes),
            4 => Some(DominoSuit::Fours),
            5 => Some(DominoSuit::Fives),
            6 => Some(DominoSuit::Sixes),
            _ => None,
        }
    }

    /// Canonical lowercase symbol used on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            DominoSuit::Blanks => "blanks",
            DominoSuit::Ones => "ones",
            DominoSuit::Twos => "twos",
            DominoSuit::Threes => "threes",
            DominoSuit::Fours => "fours",
            DominoSuit::Fives => "fives",
            DominoSuit::Sixes => "sixes",
            DominoSuit::Doubles => "doubles",
        }
    }
}

/// Points carried by a domino with these pips: 5 or 10 when the pips sum to
/// 5 or 10, else 0.
pub const fn points_of(high: u8, low: u8) -> u8 {
    match high + low {
        5 => 5,
        10 => 10,
        _ => 0,
    }
}

/// A single domino in canonical form (`high >= low`).
///
/// Fields are private so a `Domino` can only be built through
/// [`make_domino`] or the parsers; id and points are derived, never stored.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Domino {
    high: u8,
    low: u8,
}

// Note: Ord on Domino is plain high-then-low ordering, used for stable sorting
// and for comparing two non-trump dominoes. It knows nothing about trump or
// lead suit.
impl Ord for Domino {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.high
            .cmp(&other.high)
            .then_with(|| self.low.cmp(&other.low))
    }
}

impl PartialOrd for Domino {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Domino {
    /// Caller guarantees `low <= high <= MAX_PIP`.
    pub(crate) const fn canonical(high: u8, low: u8) -> Self {
        Self { high, low }
    }

    pub const fn high(&self) -> u8 {
        self.high
    }

    pub const fn low(&self) -> u8 {
        self.low
    }

    pub const fn is_double(&self) -> bool {
        self.high == self.low
    }

    pub const fn point_value(&self) -> u8 {
        points_of(self.high, self.low)
    }

    pub const fn is_count_domino(&self) -> bool {
        self.point_value() > 0
    }

    /// Canonical `"{high}-{low}"` id, unique within a set.
    pub fn id(&self) -> String {
        format!("{}-{}", self.high, self.low)
    }

    pub const fn has_pip(&self, pip: u8) -> bool {
        self.high == pip || self.low == pip
    }

    /// The end opposite `pip`, if this domino carries `pip`.
    pub const fn other_end(&self, pip: u8) -> Option<u8> {
        if self.high == pip {
            Some(self.low)
        } else if self.low == pip {
            Some(self.high)
        } else {
            None
        }
    }
}

/// Build a domino, swapping the pips into canonical order when given
/// ascending.
pub fn make_domino(high: u8, low: u8) -> Result<Domino, DomainError> {
    if high > MAX_PIP || low > MAX_PIP {
        return Err(DomainError::structural(
            StructuralKind::InvalidDomino,
            format!("pips must be 0..={MAX_PIP}, got {high}-{low}"),
        ));
    }
    let (high, low) = if high >= low { (high, low) } else { (low, high) };
    Ok(Domino::canonical(high, low))
}
