//! Deterministic dealing from the canonical set.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;

use crate::domain::domino_set::make_full_set;
use crate::domain::rules::{HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS};
use crate::domain::Domino;
use crate::errors::domain::DomainError;

/// Hands in seat order plus the undealt boneyard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deal {
    pub hands: Vec<Vec<Domino>>,
    pub boneyard: Vec<Domino>,
}

/// Shuffle the full set with a ChaCha20 stream seeded from `seed` and deal
/// seven dominoes to each of `player_count` players.
///
/// Same seed, same deal. Hands are sorted strongest-looking first (plain
/// order, descending) for stable display.
pub fn deal_hands(player_count: usize, seed: u64) -> Result<Deal, DomainError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
        return Err(DomainError::config(format!(
            "Cannot deal to {player_count} players; expected {MIN_PLAYERS}..={MAX_PLAYERS}"
        )));
    }

    let mut dominoes = make_full_set().dominoes;
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    dominoes.shuffle(&mut rng);

    let boneyard = dominoes.split_off(player_count * HAND_SIZE);
    let hands = dominoes
        .chunks(HAND_SIZE)
        .map(|chunk| {
            let mut hand = chunk.to_vec();
            hand.sort_by(|a, b| b.cmp(a));
            hand
        })
        .collect();

    tracing::debug!(player_count, seed, boneyard = boneyard.len(), "hands dealt");
    Ok(Deal { hands, boneyard })
}
