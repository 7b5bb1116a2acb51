//! API Routes
//!
//! Configures the Axum router with all flag server endpoints.

use std::time::Duration;

use axum::{
    http::StatusCode,
    middleware::map_response,
    response::{IntoResponse, Response},
    routing::{get, get_service, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeFile,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::handlers::{
    get_flag_handler, health_handler, last_handler, post_flag_handler, stats_handler, AppState,
};
use crate::config::Config;
use crate::error::FlagError;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /flag` - Store a flag, returns its identifier
/// - `GET /flag/:id` - Retrieve a flag by identifier
/// - `GET /last` - Most recent identifiers, `?limit=N`
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
/// - `GET /` - Landing page
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
/// - Timeout: Aborts requests exceeding the configured deadline
pub fn create_router(state: AppState, config: &Config) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        .route("/flag", post(post_flag_handler))
        .route("/flag/", get(get_flag_handler))
        .route("/flag/:id", get(get_flag_handler))
        .route("/last", get(last_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/", get_service(ServeFile::new(&config.index_path)))
        .layer(cors);

    with_timeout(routes, Duration::from_secs(config.request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Applies the request deadline, answering expired requests with the
/// standard error body.
fn with_timeout<S>(router: Router<S>, timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(TimeoutLayer::new(timeout))
        .layer(map_response(timeout_envelope))
}

/// Handlers never answer 408 themselves, so any 408 here came from the
/// timeout layer.
async fn timeout_envelope(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        FlagError::Timeout.into_response()
    } else {
        response
    }
}
