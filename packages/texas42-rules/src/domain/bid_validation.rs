//! Bid validation, checked in a fixed order where the first failure wins:
//!
//! 1. `BIDDING_COMPLETE`
//! 2. `NOT_CURRENT_BIDDER`
//! 3. `BID_TOO_LOW` / `BID_TOO_HIGH`
//! 4. `INVALID_TRUMP_SUIT` (only reachable from raw [`BidRecord`] input)
//! 5. `BID_NOT_HIGHER`
//! 6. special-contract rules → `INVALID_SPECIAL_CONTRACT`
//! 7. `MISSING_TRUMP`
//! 8. `MARKS_MISMATCH`
//!
//! A pass is valid whenever 1 and 2 pass. Validation never mutates state.

use super::bidding::{parse_record_trump, Bid, BidRecord, BiddingState, ContractType};
use super::marks::to_amount;
use super::validation::ValidationResult;
use crate::config::RulesConfig;
use crate::domain::rules::{MAX_BID, MIN_BID, PLUNGE_MIN_BID};
use crate::errors::domain::{DomainError, ValidationKind};

fn reject(kind: ValidationKind, detail: impl Into<String>) -> Result<(), DomainError> {
    let err = DomainError::validation(kind, detail);
    tracing::trace!(code = %err.code(), detail = err.detail(), "bid rejected");
    Err(err)
}

// Rules 1-2; the bid must also be made in the acting player's name.
fn check_turn(
    state: &BiddingState,
    bidding_player: &str,
    bid_player: &str,
) -> Result<(), DomainError> {
    if state.bidding_complete {
        return reject(ValidationKind::BiddingComplete, "Bidding is already complete");
    }
    if state.current_bidder.as_deref() != Some(bidding_player) {
        return reject(
            ValidationKind::NotCurrentBidder,
            format!("It is not {bidding_player}'s turn to bid"),
        );
    }
    if bid_player != bidding_player {
        return reject(
            ValidationKind::NotCurrentBidder,
            format!("{bidding_player} cannot bid on behalf of {bid_player}"),
        );
    }
    Ok(())
}

// Rule 3; amounts are widened so raw records share the check.
fn check_amount_range(amount: i64) -> Result<(), DomainError> {
    if amount < MIN_BID as i64 {
        return reject(
            ValidationKind::BidTooLow,
            format!("Bid {amount} is below the minimum of {MIN_BID}"),
        );
    }
    if amount > MAX_BID as i64 {
        return reject(
            ValidationKind::BidTooHigh,
            format!("Bid {amount} exceeds the maximum of {MAX_BID}"),
        );
    }
    Ok(())
}

// Rule 5
fn check_outbids(amount: i64, state: &BiddingState) -> Result<(), DomainError> {
    if amount < state.minimum_bid as i64 {
        return reject(
            ValidationKind::BidNotHigher,
            format!("Bid {amount} must be at least {}", state.minimum_bid),
        );
    }
    Ok(())
}

// Rules 5-8
fn check_against_state(
    bid: &Bid,
    state: &BiddingState,
    config: &RulesConfig,
) -> Result<(), DomainError> {
    check_outbids(bid.amount as i64, state)?;

    if bid.is_special_contract {
        check_special_contract(bid, config)?;
    } else if bid.trump.is_none() {
        return reject(ValidationKind::MissingTrump, "A bid must name a trump suit");
    }

    if let Some(marks) = bid.marks {
        if to_amount(marks) != bid.amount {
            return reject(
                ValidationKind::MarksMismatch,
                format!("{marks} marks is {} points, not {}", to_amount(marks), bid.amount),
            );
        }
    }
    Ok(())
}

fn check_special_contract(bid: &Bid, config: &RulesConfig) -> Result<(), DomainError> {
    if !config.allow_special_contracts {
        return reject(
            ValidationKind::InvalidSpecialContract,
            "Special contracts are disabled at this table",
        );
    }
    let Some(contract) = bid.contract_type else {
        return reject(
            ValidationKind::InvalidSpecialContract,
            "Special contract bid without a contract type",
        );
    };
    match contract {
        ContractType::Nello | ContractType::Sevens => Ok(()),
        ContractType::Plunge if bid.amount < PLUNGE_MIN_BID => reject(
            ValidationKind::InvalidSpecialContract,
            format!("Plunge requires at least {PLUNGE_MIN_BID} (4 marks)"),
        ),
        ContractType::Plunge => Ok(()),
        ContractType::FollowMe if bid.doubles_option.is_none() => reject(
            ValidationKind::InvalidSpecialContract,
            "Follow-me requires doubles high or low",
        ),
        ContractType::FollowMe => Ok(()),
    }
}

/// Ordered bid check with the default table rules.
pub fn check_bid(
    bid: &Bid,
    state: &BiddingState,
    bidding_player: &str,
) -> Result<(), DomainError> {
    check_bid_with(bid, state, bidding_player, &RulesConfig::default())
}

/// Ordered bid check under `config`.
pub fn check_bid_with(
    bid: &Bid,
    state: &BiddingState,
    bidding_player: &str,
    config: &RulesConfig,
) -> Result<(), DomainError> {
    check_turn(state, bidding_player, &bid.player_id)?;
    if bid.is_pass() {
        return Ok(());
    }
    check_amount_range(bid.amount as i64)?;
    check_against_state(bid, state, config)
}

/// Tagged-result form of [`check_bid`].
pub fn validate_bid(bid: &Bid, state: &BiddingState, bidding_player: &str) -> ValidationResult {
    check_bid(bid, state, bidding_player).into()
}

/// Full ordered validation of raw, untrusted bid input under `config`.
///
/// Unknown trump symbols on conventional bids are reported as
/// `INVALID_TRUMP_SUIT` in their ordered slot, after turn and amount checks.
/// Malformed contract, doubles or marks fields are only looked at once the
/// amount is known to outbid the current high bid.
pub fn validate_bid_record(
    record: &BidRecord,
    state: &BiddingState,
    bidding_player: &str,
    config: &RulesConfig,
) -> ValidationResult {
    check_bid_record(record, state, bidding_player, config).into()
}

pub fn check_bid_record(
    record: &BidRecord,
    state: &BiddingState,
    bidding_player: &str,
    config: &RulesConfig,
) -> Result<(), DomainError> {
    check_turn(state, bidding_player, &record.player_id)?;
    if record.amount == 0 {
        return Ok(());
    }
    check_amount_range(record.amount)?;
    if !record.is_special_contract {
        parse_record_trump(record)?;
    }
    check_outbids(record.amount, state)?;
    let bid = Bid::try_from(record.clone())?;
    check_against_state(&bid, state, config)
}
