use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier assigned to a record by the store at save time.
///
/// Identifiers are UUIDv7 values, so they sort roughly by creation time
/// and are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generates a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}

impl FromStr for RecordId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A candidate record that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecord {
    pub name: String,
    /// Second unique key across all records.
    pub nickname: String,
    /// Expected shape is `YYYY-MM-DD`; see [`crate::validation`].
    pub birthdate: String,
    pub stack: Option<Vec<String>>,
}

impl NewRecord {
    /// Attaches a store-assigned identifier, producing the finalized record.
    pub fn into_record(self, id: RecordId) -> Record {
        Record {
            id,
            name: self.name,
            nickname: self.nickname,
            birthdate: self.birthdate,
            stack: self.stack,
        }
    }
}

/// A persisted record. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    pub nickname: String,
    pub birthdate: String,
    pub stack: Option<Vec<String>>,
}

impl Record {
    /// Returns true when `term` occurs in the name, the nickname, or any stack tag,
    /// ignoring case. `term` is expected to be lowercased already.
    pub fn matches_lowercase(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(term)
            || self.nickname.to_lowercase().contains(term)
            || self
                .stack
                .iter()
                .flatten()
                .any(|tag| tag.to_lowercase().contains(term))
    }
}
