//! Bids and the bidding state machine.
//!
//! A hand's bidding is `Open` until the pass/bid sequence reaches a terminal
//! condition, then `Complete` with either a winning bid or no winner (redeal).
//! Every transition returns a new [`BiddingState`]; nothing is mutated in place.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::OffsetDateTime;

use super::dominoes_types::DominoSuit;
use super::marks::to_amount;
use super::state::{next_in_order, PlayerId};
use crate::domain::rules::{DEFAULT_PLAYERS, MIN_BID};
use crate::errors::domain::{DomainError, StructuralKind, ValidationKind};

/// Alternative contracts with their own win conditions.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ContractType {
    /// Bidder must lose every trick.
    Nello,
    /// Bidder holding four or more doubles; partner names trump and the side
    /// must take every trick.
    Plunge,
    /// Domino closest to seven pips wins each trick; the side must take all.
    Sevens,
    /// No trump; doubles play high or low per `doublesOption`.
    FollowMe,
}

impl ContractType {
    pub const ALL: [ContractType; 4] = [
        ContractType::Nello,
        ContractType::Plunge,
        ContractType::Sevens,
        ContractType::FollowMe,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ContractType::Nello => "nello",
            ContractType::Plunge => "plunge",
            ContractType::Sevens => "sevens",
            ContractType::FollowMe => "follow-me",
        }
    }
}

impl FromStr for ContractType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContractType::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                DomainError::structural(
                    StructuralKind::ParseContract,
                    format!("Invalid contract type: {s}"),
                )
            })
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ContractType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ContractType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<ContractType>()
            .map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}

/// How doubles rank in a follow-me hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoublesOption {
    High,
    Low,
}

impl FromStr for DoublesOption {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(DoublesOption::High),
            "low" => Ok(DoublesOption::Low),
            _ => Err(DomainError::structural(
                StructuralKind::ParseContract,
                format!("Invalid doubles option: {s}"),
            )),
        }
    }
}

/// A bid or pass. `amount == 0` is a pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "BidRecord")]
pub struct Bid {
    pub player_id: PlayerId,
    pub amount: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trump: Option<DominoSuit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marks: Option<u8>,
    pub is_special_contract: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<ContractType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doubles_option: Option<DoublesOption>,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl Bid {
    fn base(player_id: impl Into<PlayerId>, amount: u16) -> Self {
        Self {
            player_id: player_id.into(),
            amount,
            trump: None,
            marks: None,
            is_special_contract: false,
            contract_type: None,
            doubles_option: None,
            timestamp: OffsetDateTime::UNIX_EPOCH,
        }
    }

    pub fn pass(player_id: impl Into<PlayerId>) -> Self {
        Self::base(player_id, 0)
    }

    /// Conventional point bid.
    pub fn points(player_id: impl Into<PlayerId>, amount: u16, trump: DominoSuit) -> Self {
        Self {
            trump: Some(trump),
            ..Self::base(player_id, amount)
        }
    }

    /// Conventional bid expressed in marks; the amount is derived.
    pub fn mark_bid(player_id: impl Into<PlayerId>, marks: u8, trump: DominoSuit) -> Self {
        Self {
            trump: Some(trump),
            marks: Some(marks),
            ..Self::base(player_id, to_amount(marks))
        }
    }

    pub fn contract(
        player_id: impl Into<PlayerId>,
        amount: u16,
        contract_type: ContractType,
    ) -> Self {
        Self {
            is_special_contract: true,
            contract_type: Some(contract_type),
            ..Self::base(player_id, amount)
        }
    }

    pub fn with_doubles_option(mut self, option: DoublesOption) -> Self {
        self.doubles_option = Some(option);
        self
    }

    pub fn with_trump(mut self, trump: DominoSuit) -> Self {
        self.trump = Some(trump);
        self
    }

    pub fn with_marks(mut self, marks: u8) -> Self {
        self.marks = Some(marks);
        self
    }

    pub fn with_timestamp(mut self, at: OffsetDateTime) -> Self {
        self.timestamp = at;
        self
    }

    pub fn is_pass(&self) -> bool {
        self.amount == 0
    }
}

/// Untrusted wire form of a bid: suit and contract fields are plain strings
/// and numbers are unbounded until checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidRecord {
    pub player_id: String,
    pub amount: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trump: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marks: Option<i64>,
    #[serde(default)]
    pub is_special_contract: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doubles_option: Option<String>,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<OffsetDateTime>,
}

impl From<&Bid> for BidRecord {
    fn from(bid: &Bid) -> Self {
        Self {
            player_id: bid.player_id.clone(),
            amount: bid.amount as i64,
            trump: bid.trump.map(|t| t.as_str().to_string()),
            marks: bid.marks.map(i64::from),
            is_special_contract: bid.is_special_contract,
            contract_type: bid.contract_type.map(|c| c.as_str().to_string()),
            doubles_option: bid.doubles_option.map(|o| match o {
                DoublesOption::High => "high".to_string(),
                DoublesOption::Low => "low".to_string(),
            }),
            timestamp: Some(bid.timestamp),
        }
    }
}

/// Parse the record's trump, reporting `INVALID_TRUMP_SUIT` for unknown
/// symbols.
pub(crate) fn parse_record_trump(record: &BidRecord) -> Result<Option<DominoSuit>, DomainError> {
    record
        .trump
        .as_deref()
        .map(|t| {
            t.parse::<DominoSuit>().map_err(|_| {
                DomainError::validation(
                    ValidationKind::InvalidTrumpSuit,
                    format!("'{t}' is not a trump suit"),
                )
            })
        })
        .transpose()
}

/// Converts without applying game rules beyond what the typed `Bid` can
/// represent; run [`crate::domain::bid_validation::validate_bid_record`] for
/// the full ordered check.
impl TryFrom<BidRecord> for Bid {
    type Error = DomainError;

    fn try_from(record: BidRecord) -> Result<Self, Self::Error> {
        let amount = u16::try_from(record.amount).map_err(|_| {
            let kind = if record.amount < 0 {
                ValidationKind::BidTooLow
            } else {
                ValidationKind::BidTooHigh
            };
            DomainError::validation(kind, format!("Bid amount {} out of range", record.amount))
        })?;
        // Special contracts need no trump; an unreadable one is dropped.
        let trump = if record.is_special_contract {
            parse_record_trump(&record).ok().flatten()
        } else {
            parse_record_trump(&record)?
        };
        let marks = record
            .marks
            .map(|m| {
                u8::try_from(m).map_err(|_| {
                    DomainError::validation(
                        ValidationKind::MarksMismatch,
                        format!("Marks {m} out of range"),
                    )
                })
            })
            .transpose()?;
        let as_contract_error = |e: DomainError| {
            DomainError::validation(ValidationKind::InvalidSpecialContract, e.detail())
        };
        let contract_type = record
            .contract_type
            .as_deref()
            .map(str::parse::<ContractType>)
            .transpose()
            .map_err(as_contract_error)?;
        let doubles_option = record
            .doubles_option
            .as_deref()
            .map(str::parse::<DoublesOption>)
            .transpose()
            .map_err(as_contract_error)?;

        Ok(Bid {
            player_id: record.player_id,
            amount,
            trump,
            marks,
            is_special_contract: record.is_special_contract,
            contract_type,
            doubles_option,
            timestamp: record.timestamp.unwrap_or(OffsetDateTime::UNIX_EPOCH),
        })
    }
}

/// Bidding state for one hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiddingState {
    pub current_bidder: Option<PlayerId>,
    pub current_bid: Option<Bid>,
    pub bid_history: Vec<Bid>,
    pub bidding_complete: bool,
    /// Consecutive passes since the last live bid.
    pub pass_count: usize,
    pub minimum_bid: u16,
}

/// Where a hand's bidding stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BiddingOutcome {
    Open,
    Won(Bid),
    /// Everyone passed; the orchestrator decides how to redeal.
    Redeal,
}

impl BiddingState {
    /// Open bidding with `first_bidder` to act.
    pub fn new(first_bidder: impl Into<PlayerId>) -> Self {
        Self {
            current_bidder: Some(first_bidder.into()),
            current_bid: None,
            bid_history: Vec::new(),
            bidding_complete: false,
            pass_count: 0,
            minimum_bid: MIN_BID,
        }
    }

    pub fn outcome(&self) -> BiddingOutcome {
        match (&self.current_bid, self.bidding_complete) {
            (_, false) => BiddingOutcome::Open,
            (Some(bid), true) => BiddingOutcome::Won(bid.clone()),
            (None, true) => BiddingOutcome::Redeal,
        }
    }

    /// Winning bidder, once bidding is complete.
    pub fn winner(&self) -> Option<&PlayerId> {
        if !self.bidding_complete {
            return None;
        }
        self.current_bid.as_ref().map(|b| &b.player_id)
    }

    /// Structural self-check for states received from outside.
    ///
    /// `minimum_bid` must agree with `current_bid`, `current_bid` must be the
    /// last live bid in the history, and `pass_count` must equal the trailing
    /// run of passes.
    pub fn is_consistent(&self) -> bool {
        let last_live = self.bid_history.iter().rev().find(|b| !b.is_pass());
        let trailing_passes = self
            .bid_history
            .iter()
            .rev()
            .take_while(|b| b.is_pass())
            .count();
        self.minimum_bid == get_minimum_bid(self)
            && last_live == self.current_bid.as_ref()
            && trailing_passes == self.pass_count
            && (self.bidding_complete || self.current_bidder.is_some())
    }
}

pub fn get_minimum_bid(state: &BiddingState) -> u16 {
    state
        .current_bid
        .as_ref()
        .map_or(MIN_BID, |b| b.amount.saturating_add(1))
}

/// Apply an already-validated bid or pass.
///
/// With `n` seated players, a live bid followed by `n - 1` consecutive passes
/// wins the auction; `n` passes with no live bid end it with no winner.
/// `player_order` may be empty, in which case the default table size is used
/// for the thresholds and the bidder does not advance.
pub fn apply_bid(state: &BiddingState, bid: Bid, player_order: &[PlayerId]) -> BiddingState {
    let player_count = if player_order.is_empty() {
        DEFAULT_PLAYERS
    } else {
        player_order.len()
    };
    let closing_passes = player_count.saturating_sub(1).max(1);

    let mut next = state.clone();
    next.current_bidder = next_in_order(player_order, &bid.player_id).cloned();

    if bid.is_pass() {
        next.pass_count += 1;
        tracing::debug!(
            player_id = %bid.player_id,
            pass_count = next.pass_count,
            "pass applied"
        );
    } else {
        tracing::debug!(
            player_id = %bid.player_id,
            amount = bid.amount,
            trump = ?bid.trump,
            contract = ?bid.contract_type,
            "bid applied"
        );
        next.pass_count = 0;
        next.minimum_bid = bid.amount.saturating_add(1);
        next.current_bid = Some(bid.clone());
    }
    next.bid_history.push(bid);

    let closed = match next.current_bid {
        Some(_) => next.pass_count >= closing_passes,
        None => next.pass_count >= player_count,
    };
    if closed {
        next.bidding_complete = true;
        next.current_bidder = None;
        tracing::debug!(
            winner = ?next.current_bid.as_ref().map(|b| &b.player_id),
            amount = ?next.current_bid.as_ref().map(|b| b.amount),
            "bidding complete"
        );
    }
    next
}
