//! Request DTOs for the flag server API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

use crate::error::FlagError;

/// Number of identifiers returned by `GET /last` without a usable limit.
pub const DEFAULT_LAST_LIMIT: usize = 10;

/// Exclusive upper bound for an accepted `limit`.
pub const MAX_LAST_LIMIT: i64 = 100;

/// Request body for `POST /flag`
#[derive(Debug, Clone, Deserialize)]
pub struct FlagRequest {
    /// The flag text to store, empty when omitted
    #[serde(default)]
    pub flag: String,
}

/// Query string for `GET /last`
///
/// `limit` is kept as raw text so parse failures can be reported with the
/// server's own error shape.
#[derive(Debug, Clone, Default)]
pub struct LastQuery {
    pub limit: Option<String>,
}

impl LastQuery {
    /// Builds the query from decoded key/value pairs. A repeated `limit`
    /// resolves to its first occurrence.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let limit = pairs
            .into_iter()
            .find(|(key, _)| key == "limit")
            .map(|(_, value)| value);
        Self { limit }
    }

    /// Resolves the effective number of identifiers to return.
    ///
    /// Absent or empty limits use the default. A limit that is not an
    /// integer is rejected. Integers outside `1..100` fall back to the
    /// default without error.
    pub fn effective_limit(&self) -> Result<usize, FlagError> {
        let raw = match self.limit.as_deref() {
            None | Some("") => return Ok(DEFAULT_LAST_LIMIT),
            Some(raw) => raw,
        };

        let n: i64 = raw
            .parse()
            .map_err(|e: std::num::ParseIntError| FlagError::InvalidLimit(e.to_string()))?;

        if n > 0 && n < MAX_LAST_LIMIT {
            Ok(n as usize)
        } else {
            Ok(DEFAULT_LAST_LIMIT)
        }
    }
}
