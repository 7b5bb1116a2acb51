//! API Module
//!
//! HTTP handlers and routing for the flag server.
//!
//! # Endpoints
//! - `POST /flag` - Store a flag
//! - `GET /flag/:id` - Retrieve a flag by identifier
//! - `GET /last` - List the most recent identifiers
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint
//! - `GET /` - Landing page

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
