//! Mark arithmetic.
//!
//! `to_marks` is lossy: `to_amount(to_marks(a)) == a` only when `a` is a
//! multiple of 42. The other direction, `to_marks(to_amount(m)) == m`, always
//! holds.

use super::bidding::Bid;
use crate::domain::rules::MARK_VALUE;

/// Whole marks in a point amount; anything below one mark is 0.
///
/// Saturates at `u8::MAX` for amounts of 256 marks or more.
pub const fn to_marks(amount: u16) -> u8 {
    let marks = amount / MARK_VALUE;
    if marks > u8::MAX as u16 {
        u8::MAX
    } else {
        marks as u8
    }
}

pub const fn to_amount(marks: u8) -> u16 {
    marks as u16 * MARK_VALUE
}

/// A bid at or above one mark, or one carrying an explicit mark count.
pub fn is_mark_bid(bid: &Bid) -> bool {
    bid.amount >= MARK_VALUE || bid.marks.is_some_and(|m| m > 0)
}
