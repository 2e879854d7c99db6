#![allow(dead_code)]

// tests/common/mod.rs
use texas42_rules::{Domino, PlayerId};

// Logging is auto-installed for every integration test binary
#[ctor::ctor]
fn init_logging() {
    rules_test_support::logging::init();
}

/// `p1..p4` in seating order (north, east, south, west).
pub fn player_order() -> Vec<PlayerId> {
    ["p1", "p2", "p3", "p4"].map(String::from).to_vec()
}

/// Parse hardcoded domino tokens (e.g. `["6-6", "5-0"]`).
pub fn dominoes(tokens: &[&str]) -> Vec<Domino> {
    tokens
        .iter()
        .map(|s| s.parse::<Domino>().expect("hardcoded valid domino token"))
        .collect()
}
