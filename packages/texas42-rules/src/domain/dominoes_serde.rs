//! Serialization and deserialization for domino types
//!
//! Dominoes cross the engine boundary as full objects
//! (`{id, high, low, pointValue, isCountDomino}`). Nothing supplied from
//! outside is trusted: every field is re-derived from the pips and compared.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::dominoes_types::{make_domino, points_of, Domino, DominoSuit};
use crate::domain::rules::MAX_PIP;
use crate::errors::domain::{DomainError, StructuralKind};

// DominoSuit serde
impl Serialize for DominoSuit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DominoSuit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<DominoSuit>()
            .map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}

/// Untrusted wire form of a domino, exactly as collaborators send it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DominoRecord {
    pub id: String,
    pub high: i64,
    pub low: i64,
    pub point_value: i64,
    pub is_count_domino: bool,
}

impl From<Domino> for DominoRecord {
    fn from(d: Domino) -> Self {
        Self {
            id: d.id(),
            high: d.high() as i64,
            low: d.low() as i64,
            point_value: d.point_value() as i64,
            is_count_domino: d.is_count_domino(),
        }
    }
}

/// Structural and semantic re-check of an externally supplied domino.
///
/// Requires pips in 0..=6, `high >= low`, the canonical id, and the point
/// fields to match what the pips imply.
pub fn validate_domino(record: &DominoRecord) -> bool {
    let in_range = |p: i64| (0..=MAX_PIP as i64).contains(&p);
    if !in_range(record.high) || !in_range(record.low) {
        return false;
    }
    if record.high < record.low {
        return false;
    }
    if record.id != format!("{}-{}", record.high, record.low) {
        return false;
    }
    let expected = points_of(record.high as u8, record.low as u8) as i64;
    record.point_value == expected && record.is_count_domino == (expected > 0)
}

impl TryFrom<DominoRecord> for Domino {
    type Error = DomainError;

    fn try_from(record: DominoRecord) -> Result<Self, Self::Error> {
        if !validate_domino(&record) {
            return Err(DomainError::structural(
                StructuralKind::InvalidDomino,
                format!("Inconsistent domino record: {record:?}"),
            ));
        }
        make_domino(record.high as u8, record.low as u8)
    }
}

// Domino serde (full object shape)
impl Serialize for Domino {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut st = serializer.serialize_struct("Domino", 5)?;
        st.serialize_field("id", &self.id())?;
        st.serialize_field("high", &self.high())?;
        st.serialize_field("low", &self.low())?;
        st.serialize_field("pointValue", &self.point_value())?;
        st.serialize_field("isCountDomino", &self.is_count_domino())?;
        st.end()
    }
}

impl<'de> Deserialize<'de> for Domino {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = DominoRecord::deserialize(deserializer)?;
        Domino::try_from(record).map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}
