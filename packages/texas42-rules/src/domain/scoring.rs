//! Hand scoring: trick points and whether a bid was made.

use serde::Serialize;

use crate::domain::bidding::{Bid, ContractType};
use crate::domain::marks::to_marks;
use crate::domain::rules::{POINTS_PER_HAND, TRICKS_PER_HAND};
use crate::domain::state::PlayerId;
use crate::domain::tricks::Trick;

/// Points a won trick is worth: one for the trick plus its count dominoes.
/// An empty trick is worth nothing.
///
/// Sums are widened so a malformed trick received from outside cannot
/// overflow them.
pub fn trick_points(trick: &Trick) -> u32 {
    if trick.is_empty() {
        return 0;
    }
    1 + trick
        .plays
        .iter()
        .map(|p| u32::from(p.domino.point_value()))
        .sum::<u32>()
}

/// What one side took over a hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SideTally {
    pub tricks_won: u32,
    pub points: u32,
}

/// Sum the completed tricks won by any member of `side`.
pub fn tally_side(tricks: &[Trick], side: &[PlayerId]) -> SideTally {
    tricks
        .iter()
        .filter(|t| t.winner.as_ref().is_some_and(|w| side.contains(w)))
        .fold(SideTally::default(), |acc, t| SideTally {
            tricks_won: acc.tricks_won.saturating_add(1),
            points: acc.points.saturating_add(trick_points(t)),
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BidOutcome {
    pub made: bool,
    /// Marks won by the bidding side if made, by the defenders otherwise.
    pub marks: u8,
}

/// Score a winning bid against what the bidding side took.
///
/// Point bids and follow-me need at least `min(amount, 42)` points, so any
/// bid of one mark or more needs all 42. Nello needs zero tricks; plunge and sevens need
/// every trick. Returns `None` for a pass.
pub fn bid_outcome(bid: &Bid, taken: SideTally) -> Option<BidOutcome> {
    if bid.is_pass() {
        return None;
    }
    let marks = to_marks(bid.amount).max(1);
    let made = match bid.contract_type.filter(|_| bid.is_special_contract) {
        Some(ContractType::Nello) => taken.tricks_won == 0,
        Some(ContractType::Plunge) | Some(ContractType::Sevens) => {
            taken.tricks_won == u32::from(TRICKS_PER_HAND)
        }
        Some(ContractType::FollowMe) | None => {
            let required = u32::from(bid.amount.min(u16::from(POINTS_PER_HAND)));
            taken.points >= required
        }
    };
    tracing::debug!(
        player_id = %bid.player_id,
        amount = bid.amount,
        tricks_won = taken.tricks_won,
        points = taken.points,
        made,
        marks,
        "bid scored"
    );
    Some(BidOutcome { made, marks })
}
