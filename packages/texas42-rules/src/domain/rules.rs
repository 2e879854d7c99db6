use std::ops::RangeInclusive;

/// Highest pip on a double-six set.
pub const MAX_PIP: u8 = 6;
/// Pieces in a double-six set.
pub const SET_SIZE: usize = 28;
/// Count points across the whole set.
pub const TOTAL_COUNT_POINTS: u32 = 35;
/// Dominoes dealt to each player.
pub const HAND_SIZE: usize = 7;
/// Tricks in a four-player hand.
pub const TRICKS_PER_HAND: u8 = 7;
/// Points available in a hand: count points plus one per trick.
pub const POINTS_PER_HAND: u8 = 42;

pub const DEFAULT_PLAYERS: usize = 4;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

/// One mark is worth a full hand.
pub const MARK_VALUE: u16 = 42;
pub const MIN_BID: u16 = 30;
pub const MAX_MARKS: u8 = 6;
/// 6 marks.
pub const MAX_BID: u16 = MAX_MARKS as u16 * MARK_VALUE;
/// Plunge is a 4-mark contract at minimum.
pub const PLUNGE_MIN_BID: u16 = 4 * MARK_VALUE;

/// Rank a double takes under a regular pip trump, above every non-double.
pub const TRUMP_DOUBLE_RANK: u8 = 7;

/// Live (non-pass) bid amounts.
pub fn live_bid_range() -> RangeInclusive<u16> {
    MIN_BID..=MAX_BID
}
