//! Error codes for the Texas 42 rules engine.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and are the exact strings the
//! orchestrator relays to clients.

use core::fmt;

use serde::{Serialize, Serializer};

/// Centralized error codes for the rules engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Bidding
    /// Bidding already reached a terminal state
    BiddingComplete,
    /// Bid submitted by a player whose turn it is not
    NotCurrentBidder,
    /// Live bid below 30
    BidTooLow,
    /// Bid above 6 marks (252)
    BidTooHigh,
    /// Trump is not one of the 8 suit symbols
    InvalidTrumpSuit,
    /// Bid does not exceed the current high bid
    BidNotHigher,
    /// Special contract is missing data or violates its own rules
    InvalidSpecialContract,
    /// Conventional bid without a trump
    MissingTrump,
    /// Explicit marks disagree with the amount
    MarksMismatch,

    // Trick play
    /// Must follow the lead suit
    MustFollowSuit,
    /// Domino not in the player's hand
    DominoNotInHand,
    /// Player already played in this trick
    OutOfTurn,
    /// Trick already has every play
    TrickComplete,
    /// Trick has no plays
    EmptyTrick,

    // Structural
    /// Domino pips out of range or inconsistent record
    InvalidDomino,
    /// Unparseable domino token
    ParseDomino,
    /// Unparseable suit symbol
    ParseSuit,
    /// Unparseable contract type or doubles option
    ParseContract,
    /// Table configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Bidding
            Self::BiddingComplete => "BIDDING_COMPLETE",
            Self::NotCurrentBidder => "NOT_CURRENT_BIDDER",
            Self::BidTooLow => "BID_TOO_LOW",
            Self::BidTooHigh => "BID_TOO_HIGH",
            Self::InvalidTrumpSuit => "INVALID_TRUMP_SUIT",
            Self::BidNotHigher => "BID_NOT_HIGHER",
            Self::InvalidSpecialContract => "INVALID_SPECIAL_CONTRACT",
            Self::MissingTrump => "MISSING_TRUMP",
            Self::MarksMismatch => "MARKS_MISMATCH",

            // Trick play
            Self::MustFollowSuit => "MUST_FOLLOW_SUIT",
            Self::DominoNotInHand => "DOMINO_NOT_IN_HAND",
            Self::OutOfTurn => "OUT_OF_TURN",
            Self::TrickComplete => "TRICK_COMPLETE",
            Self::EmptyTrick => "EMPTY_TRICK",

            // Structural
            Self::InvalidDomino => "INVALID_DOMINO",
            Self::ParseDomino => "PARSE_DOMINO",
            Self::ParseSuit => "PARSE_SUIT",
            Self::ParseContract => "PARSE_CONTRACT",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
