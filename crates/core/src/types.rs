//! Store-native identifier type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// Length of the canonical hex rendering of a [`RecordId`].
pub const RECORD_ID_HEX_LEN: usize = 32;

/// Identifier assigned by the document store when a record is inserted.
///
/// Backed by a time-ordered UUIDv7. At every boundary outside the store it
/// is rendered as exactly 32 lowercase hex characters (no hyphens), and
/// parsing only accepts that fixed-width form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(Uuid);

/// Returned when a string is not a canonical [`RecordId`] hex encoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("the provided hex string is not a valid record id: {0:?}")]
pub struct InvalidRecordId(pub String);

impl RecordId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Decode the canonical 32-character hex form.
    pub fn parse_hex(input: &str) -> Result<Self, InvalidRecordId> {
        if input.len() != RECORD_ID_HEX_LEN || !input.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(InvalidRecordId(input.to_string()));
        }
        Uuid::try_parse(input)
            .map(Self)
            .map_err(|_| InvalidRecordId(input.to_string()))
    }

    /// Canonical lowercase hex rendering.
    pub fn to_hex(&self) -> String {
        self.0.simple().to_string()
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for RecordId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

impl FromStr for RecordId {
    type Err = InvalidRecordId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse_hex(&raw).map_err(serde::de::Error::custom)
    }
}
