use serde::{Deserialize, Serialize};

use crate::config::RulesConfig;
use crate::domain::state::{PlayerId, Seat};
use crate::domain::trump::{hand_has_suit, is_trump, occupies, suits_of, trump_rank};
use crate::domain::validation::ValidationResult;
use crate::domain::{Domino, DominoSuit};
use crate::errors::domain::{DomainError, ValidationKind};

/// One domino played into a trick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrickPlay {
    pub domino: Domino,
    pub player_id: PlayerId,
    pub position: Seat,
    /// 0-based order within the trick.
    pub sequence_index: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trick {
    pub id: String,
    pub plays: Vec<TrickPlay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_suit: Option<DominoSuit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<PlayerId>,
}

impl Trick {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            plays: Vec::with_capacity(4),
            lead_suit: None,
            winner: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn has_played(&self, player_id: &str) -> bool {
        self.plays.iter().any(|p| p.player_id == player_id)
    }
}

/// A player's attempt to add a domino to a trick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayAttempt {
    pub player_id: PlayerId,
    pub position: Seat,
    pub domino: Domino,
}

/// Lead suit established by the first play, if any.
///
/// When the leader's domino occupies two suits (a non-double under doubles
/// trump) its higher pip sets the lead.
pub fn lead_suit_of(trick: &Trick, trump: DominoSuit) -> Option<DominoSuit> {
    let first = trick.plays.first()?;
    suits_of(&first.domino, trump).first().copied()
}

/// Dominoes in `hand` that may legally be played to `trick`.
///
/// Anything may be led. Otherwise a player must follow the lead suit when
/// able; a player void in the lead suit may play anything, trump included.
pub fn legal_suit_followers(hand: &[Domino], trick: &Trick, trump: DominoSuit) -> Vec<Domino> {
    let Some(lead) = lead_suit_of(trick, trump) else {
        return hand.to_vec();
    };
    if !hand_has_suit(hand, lead, trump) {
        return hand.to_vec();
    }
    hand.iter()
        .copied()
        .filter(|d| occupies(d, lead, trump))
        .collect()
}

/// Player currently winning `trick` (the winner once it is complete).
///
/// The highest trump rank wins if any trump was played. Otherwise the
/// highest domino occupying the lead suit wins, by plain high-then-low order.
pub fn winner_of(trick: &Trick, trump: DominoSuit) -> Result<PlayerId, DomainError> {
    let Some(lead) = lead_suit_of(trick, trump) else {
        return Err(DomainError::validation(
            ValidationKind::EmptyTrick,
            format!("Trick {} has no plays", trick.id),
        ));
    };

    let best_trump = trick
        .plays
        .iter()
        .filter_map(|p| trump_rank(&p.domino, trump).map(|rank| (rank, p)))
        .max_by_key(|(rank, _)| *rank)
        .map(|(_, p)| p);

    // The leader always occupies the lead suit, so a follower exists.
    let best = best_trump.or_else(|| {
        trick
            .plays
            .iter()
            .filter(|p| occupies(&p.domino, lead, trump))
            .max_by_key(|p| p.domino)
    });

    best.map(|p| p.player_id.clone()).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::EmptyTrick,
            format!("Trick {} has no play following {lead}", trick.id),
        )
    })
}

/// Check a play without applying it.
pub fn check_play(
    trick: &Trick,
    hand: &[Domino],
    attempt: &PlayAttempt,
    trump: DominoSuit,
    config: &RulesConfig,
) -> Result<(), DomainError> {
    if trick.plays.len() >= config.player_count {
        return Err(DomainError::validation(
            ValidationKind::TrickComplete,
            format!("Trick {} already has {} plays", trick.id, trick.plays.len()),
        ));
    }
    if trick.has_played(&attempt.player_id) {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            format!("{} already played to trick {}", attempt.player_id, trick.id),
        ));
    }
    if !hand.contains(&attempt.domino) {
        return Err(DomainError::validation(
            ValidationKind::DominoNotInHand,
            format!("{} is not in {}'s hand", attempt.domino, attempt.player_id),
        ));
    }
    if !legal_suit_followers(hand, trick, trump).contains(&attempt.domino) {
        return Err(DomainError::validation(
            ValidationKind::MustFollowSuit,
            format!(
                "{} must follow {}",
                attempt.player_id,
                lead_suit_of(trick, trump).map_or("the lead", |s| s.as_str())
            ),
        ));
    }
    Ok(())
}

pub fn validate_play(
    trick: &Trick,
    hand: &[Domino],
    attempt: &PlayAttempt,
    trump: DominoSuit,
    config: &RulesConfig,
) -> ValidationResult {
    let result: ValidationResult = check_play(trick, hand, attempt, trump, config).into();
    if result.is_valid && !trick.is_empty() && is_trump(&attempt.domino, trump) {
        let lead = lead_suit_of(trick, trump);
        if lead != Some(trump) {
            return result.with_warning(format!("{} trumps in", attempt.player_id));
        }
    }
    result
}

/// Play a domino into a trick, returning the updated trick.
///
/// The first play fixes `lead_suit`; the play that fills the trick to
/// `config.player_count` sets `winner`.
pub fn play_domino(
    trick: &Trick,
    hand: &[Domino],
    attempt: PlayAttempt,
    trump: DominoSuit,
    config: &RulesConfig,
) -> Result<Trick, DomainError> {
    check_play(trick, hand, &attempt, trump, config)?;

    let mut next = trick.clone();
    next.plays.push(TrickPlay {
        domino: attempt.domino,
        player_id: attempt.player_id,
        position: attempt.position,
        sequence_index: trick.plays.len() as u8,
    });
    if next.lead_suit.is_none() {
        next.lead_suit = lead_suit_of(&next, trump);
    }

    if next.plays.len() == config.player_count {
        let winner = winner_of(&next, trump)?;
        tracing::debug!(
            trick_id = %next.id,
            trump = %trump,
            lead = ?next.lead_suit,
            winner = %winner,
            "trick complete"
        );
        next.winner = Some(winner);
    }
    Ok(next)
}
