//! Domain layer: pure game logic types and helpers.

pub mod bid_validation;
pub mod bidding;
pub mod dealing;
pub mod domino_set;
pub mod dominoes_parsing;
pub mod dominoes_serde;
pub mod dominoes_types;
pub mod marks;
pub mod rules;
pub mod scoring;
pub mod state;
pub mod tricks;
pub mod trump;
pub mod validation;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_trump;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use bid_validation::{check_bid, check_bid_with, validate_bid, validate_bid_record};
pub use bidding::{
    apply_bid, get_minimum_bid, Bid, BidRecord, BiddingOutcome, BiddingState, ContractType,
    DoublesOption,
};
pub use dealing::{deal_hands, Deal};
pub use domino_set::{make_full_set, DominoSet};
pub use dominoes_serde::{validate_domino, DominoRecord};
pub use dominoes_types::{make_domino, points_of, Domino, DominoSuit};
pub use marks::{is_mark_bid, to_amount, to_marks};
pub use state::{PlayerId, Seat};
pub use tricks::{
    lead_suit_of, legal_suit_followers, play_domino, validate_play, winner_of, PlayAttempt, Trick,
    TrickPlay,
};
pub use trump::{compare, hierarchy, is_trump, is_valid_trump_suit, suits_of, trump_rank, TrumpHierarchy};
pub use validation::ValidationResult;
