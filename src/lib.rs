//! Flag Board - drop short text flags, read them back by id
//!
//! Flags live in a bounded in-memory cache with LRU eviction.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod ids;
pub mod models;

pub use api::{create_router, AppState};
pub use config::Config;
