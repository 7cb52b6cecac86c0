//! API route configuration, nested under `/api`.

use crate::api::handlers::{health_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes. None require authentication.
///
/// # Endpoints
///
/// - `POST /shorten`              - Create a short URL
/// - `GET  /stats/{short_code}`   - Stored record and click count
/// - `GET  /health`               - Liveness probe
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{short_code}", get(stats_handler))
        .route("/health", get(health_handler))
}
