//! Response DTOs for the flag server API
//!
//! Defines the structure of outgoing HTTP response bodies. Every body
//! carries a `status` field: `"ok"` on success, `"err"` on failure.

use serde::Serialize;

use crate::cache::{CacheStats, FlagEntry};

const STATUS_OK: &str = "ok";
const STATUS_ERR: &str = "err";

/// Response body for `POST /flag`
#[derive(Debug, Clone, Serialize)]
pub struct PostFlagResponse {
    pub status: &'static str,
    /// Generated identifier the flag was stored under
    pub id: String,
}

impl PostFlagResponse {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            status: STATUS_OK,
            id: id.into(),
        }
    }
}

/// Response body for `GET /flag/:id`
#[derive(Debug, Clone, Serialize)]
pub struct GetFlagResponse {
    pub status: &'static str,
    pub flag: FlagEntry,
}

impl GetFlagResponse {
    pub fn new(flag: FlagEntry) -> Self {
        Self {
            status: STATUS_OK,
            flag,
        }
    }
}

/// Response body for `GET /last`
#[derive(Debug, Clone, Serialize)]
pub struct LastResponse {
    pub status: &'static str,
    /// Identifiers, least recent first
    pub last: Vec<String>,
}

impl LastResponse {
    pub fn new(last: Vec<String>) -> Self {
        Self {
            status: STATUS_OK,
            last,
        }
    }
}

/// Response body for `GET /stats`
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub status: &'static str,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub insertions: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Configured maximum number of entries
    pub capacity: usize,
    /// hits / (hits + misses)
    pub hit_rate: f64,
}

impl StatsResponse {
    pub fn new(stats: &CacheStats, capacity: usize) -> Self {
        Self {
            status: STATUS_OK,
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            insertions: stats.insertions,
            total_entries: stats.total_entries,
            capacity,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for `GET /health`
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERR,
            error: error.into(),
        }
    }
}
