//! Source type of a tagged packet

use std::fmt;
use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::errors::AisTaggingError;

/// Whether a packet was received terrestrially or via satellite
///
/// Encoded in comment blocks under key `st` as `LIVE` or `SAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub enum SourceType {
    Terrestrial,
    Satellite,
}

/// Wire literals, one row per variant
const WIRE_LITERALS: [(SourceType, &str); 2] = [
    (SourceType::Terrestrial, "LIVE"),
    (SourceType::Satellite, "SAT"),
];

impl SourceType {
    /// Decode a wire value, case-insensitively.
    ///
    /// An absent value decodes to `None`; any other unknown string is an
    /// error.
    pub fn decode(value: Option<&str>) -> Result<Option<Self>, AisTaggingError> {
        let Some(value) = value else {
            return Ok(None);
        };
        WIRE_LITERALS
            .iter()
            .find(|(_, literal)| literal.eq_ignore_ascii_case(value))
            .map(|(source_type, _)| Some(*source_type))
            .ok_or_else(|| AisTaggingError::InvalidEnumeration(value.to_string()))
    }

    /// Wire literal for this source type
    pub fn encode(&self) -> &'static str {
        match self {
            SourceType::Terrestrial => WIRE_LITERALS[0].1,
            SourceType::Satellite => WIRE_LITERALS[1].1,
        }
    }
}

impl FromStr for SourceType {
    type Err = AisTaggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(Some(s))?.ok_or_else(|| AisTaggingError::InvalidEnumeration(s.to_string()))
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.encode())
    }
}
