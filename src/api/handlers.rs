//! API Handlers
//!
//! HTTP request handlers for each flag server endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use tracing::{debug, warn};

use crate::cache::{FlagEntry, FlagStore};
use crate::error::{FlagError, Result};
use crate::ids::{IdGenerator, NanoIdGenerator};
use crate::models::{
    FlagRequest, GetFlagResponse, HealthResponse, LastQuery, LastResponse, PostFlagResponse,
    StatsResponse,
};

/// Application state shared across all handlers.
///
/// The flag store is not synchronized on its own; every access goes through
/// the RwLock. Lookups take the write lock because a hit reorders recency.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe flag store
    pub cache: Arc<RwLock<FlagStore>>,
    /// Identifier source for new flags
    pub ids: Arc<dyn IdGenerator>,
}

impl AppState {
    /// Creates a new AppState with the given store and the default generator.
    pub fn new(cache: FlagStore) -> Self {
        Self::with_id_generator(cache, NanoIdGenerator::default())
    }

    /// Creates a new AppState with a specific identifier generator.
    pub fn with_id_generator(cache: FlagStore, ids: impl IdGenerator + 'static) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            ids: Arc::new(ids),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(FlagStore::new(config.max_entries))
    }
}

/// Handler for POST /flag
///
/// Stores the flag under a freshly generated identifier. The body is decoded
/// as JSON whatever its Content-Type. Nothing is stored if identifier
/// generation fails.
pub async fn post_flag_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PostFlagResponse>> {
    let req: FlagRequest =
        serde_json::from_slice(&body).map_err(|e| FlagError::InvalidBody(e.to_string()))?;

    let id = state.ids.generate().map_err(|e| {
        warn!(error = %e, "identifier generation failed");
        FlagError::from(e)
    })?;

    let entry = FlagEntry::new(req.flag);
    state.cache.write().await.put(id.clone(), entry);
    debug!(id = %id, "flag stored");

    Ok(Json(PostFlagResponse::new(id)))
}

/// Handler for GET /flag/:id
///
/// A hit promotes the flag to most recently used.
pub async fn get_flag_handler(
    State(state): State<AppState>,
    id: Option<Path<String>>,
) -> Result<Json<GetFlagResponse>> {
    let id = match id {
        Some(Path(id)) if !id.trim().is_empty() => id,
        _ => return Err(FlagError::MissingId),
    };

    let flag = state.cache.write().await.get(&id).ok_or(FlagError::NotFound)?;

    Ok(Json(GetFlagResponse::new(flag)))
}

/// Handler for GET /last
///
/// Returns the most recently used identifiers, oldest of them first.
pub async fn last_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<LastResponse>> {
    let Query(pairs) = query.map_err(|e| FlagError::InvalidLimit(e.body_text()))?;
    let limit = LastQuery::from_pairs(pairs).effective_limit()?;

    let last = state.cache.read().await.recent(limit);

    Ok(Json(LastResponse::new(last)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(StatsResponse::new(&cache.stats(), cache.capacity()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
