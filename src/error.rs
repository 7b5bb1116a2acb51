//! Error types for the flag server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::ids::IdError;
use crate::models::ErrorResponse;

// == Flag Error Enum ==
/// Unified error type for request handling.
#[derive(Error, Debug)]
pub enum FlagError {
    /// Request did not name an identifier
    #[error("id not found")]
    MissingId,

    /// `limit` query parameter is not an integer
    #[error("incorrect limit: {0}")]
    InvalidLimit(String),

    /// Request body could not be decoded
    #[error("{0}")]
    InvalidBody(String),

    /// Identifier is not resident in the cache
    #[error("flag not found")]
    NotFound,

    /// Identifier generation failed
    #[error("{0}")]
    IdGeneration(#[from] IdError),

    /// Request exceeded the configured deadline
    #[error("request timed out")]
    Timeout,
}

impl FlagError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            FlagError::MissingId | FlagError::InvalidLimit(_) | FlagError::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            FlagError::NotFound => StatusCode::NOT_FOUND,
            FlagError::IdGeneration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            FlagError::Timeout => StatusCode::REQUEST_TIMEOUT,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for FlagError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse::new(self.to_string()));
        (self.status_code(), body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for request handlers.
pub type Result<T> = std::result::Result<T, FlagError>;
