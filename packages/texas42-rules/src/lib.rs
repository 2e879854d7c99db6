#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod errors;

// Re-exports for public API
pub use config::RulesConfig;
pub use domain::{
    apply_bid, check_bid, check_bid_with, compare, deal_hands, get_minimum_bid, hierarchy,
    is_mark_bid, is_trump, is_valid_trump_suit, lead_suit_of, legal_suit_followers, make_domino,
    make_full_set, play_domino, points_of, suits_of, to_amount, to_marks, trump_rank,
    validate_bid, validate_bid_record, validate_domino, validate_play, winner_of, Bid, BidRecord,
    BiddingOutcome, BiddingState, ContractType, Deal, Domino, DominoRecord, DominoSet, DominoSuit,
    DoublesOption, PlayAttempt, PlayerId, Seat, Trick, TrickPlay, TrumpHierarchy,
    ValidationResult,
};
pub use errors::{DomainError, ErrorCode};

// Logging is auto-installed for the unit test binary
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    rules_test_support::logging::init();
}
