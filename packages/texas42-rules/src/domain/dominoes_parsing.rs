//! Domino and suit parsing from string representations (e.g., "6-4", "sixes")

use std::fmt;
use std::str::FromStr;

use super::dominoes_types::{make_domino, Domino, DominoSuit};
use crate::errors::domain::{DomainError, StructuralKind};

impl FromStr for DominoSuit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DominoSuit::ALL
            .into_iter()
            .find(|suit| suit.as_str() == s)
            .ok_or_else(|| {
                DomainError::structural(StructuralKind::ParseSuit, format!("Invalid suit: {s}"))
            })
    }
}

impl fmt::Display for DominoSuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses `"{a}-{b}"` with single-digit pips. Ascending input such as `"2-6"`
/// is accepted and canonicalised, the same as [`make_domino`].
impl FromStr for Domino {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err =
            || DomainError::structural(StructuralKind::ParseDomino, format!("Parse domino: {s}"));

        let (a, b) = s.split_once('-').ok_or_else(parse_err)?;
        let pip = |part: &str| -> Result<u8, DomainError> {
            let mut chars = part.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => c
                    .to_digit(10)
                    .map(|d| d as u8)
                    .ok_or_else(parse_err),
                _ => Err(parse_err()),
            }
        };
        make_domino(pip(a)?, pip(b)?)
    }
}

impl fmt::Display for Domino {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.high(), self.low())
    }
}

/// Non-panicking helper to parse domino tokens into Domino instances.
pub fn try_parse_dominoes<I, S>(tokens: I) -> Result<Vec<Domino>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Domino>())
        .collect()
}
