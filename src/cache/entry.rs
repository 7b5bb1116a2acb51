//! Flag Entry Module
//!
//! Defines the value stored for each generated flag identifier.

use chrono::{DateTime, Utc};
use serde::Serialize;

// == Flag Entry ==
/// A stored flag: its text and the moment it was added.
///
/// Entries are never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagEntry {
    /// The flag text as submitted
    pub flag: String,
    /// Creation timestamp (UTC, RFC 3339 on the wire)
    pub added: DateTime<Utc>,
}

impl FlagEntry {
    // == Constructor ==
    /// Creates an entry stamped with the current time.
    pub fn new(flag: impl Into<String>) -> Self {
        Self::with_timestamp(flag, Utc::now())
    }

    /// Creates an entry with an explicit timestamp.
    pub fn with_timestamp(flag: impl Into<String>, added: DateTime<Utc>) -> Self {
        Self {
            flag: flag.into(),
            added,
        }
    }
}
