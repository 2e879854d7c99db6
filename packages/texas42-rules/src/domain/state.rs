//! Player identity and seat-rotation helpers shared by bidding and trick play.

use serde::{Deserialize, Serialize};

/// Opaque player id assigned by the orchestrator.
pub type PlayerId = String;

/// Table position of a play.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    North,
    East,
    South,
    West,
}

impl Seat {
    /// Clockwise seating order.
    pub const ALL: [Seat; 4] = [Seat::North, Seat::East, Seat::South, Seat::West];

    pub fn index(self) -> usize {
        match self {
            Seat::North => 0,
            Seat::East => 1,
            Seat::South => 2,
            Seat::West => 3,
        }
    }

    /// Seat `delta` steps clockwise (negative is counter-clockwise).
    pub fn offset(self, delta: i8) -> Seat {
        let idx = (self.index() as i16 + delta as i16).rem_euclid(4) as usize;
        Seat::ALL[idx]
    }

    pub fn next(self) -> Seat {
        self.offset(1)
    }

    /// North/South and East/West play as partners.
    pub fn partner(self) -> Seat {
        self.offset(2)
    }
}

/// The player after `current` in `order`, wrapping around.
///
/// Returns `None` if `current` is not seated in `order`.
pub fn next_in_order<'a>(order: &'a [PlayerId], current: &str) -> Option<&'a PlayerId> {
    let pos = order.iter().position(|p| p == current)?;
    order.get((pos + 1) % order.len())
}
