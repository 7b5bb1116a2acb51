//! Request and Response models for the flag server API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{FlagRequest, LastQuery, DEFAULT_LAST_LIMIT};
pub use responses::{
    ErrorResponse, GetFlagResponse, HealthResponse, LastResponse, PostFlagResponse, StatsResponse,
};
