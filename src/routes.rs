//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{short_code}` - Short link redirect
//! - `/api/*`             - JSON API (shorten, stats, health)
//! - `/static/*`          - Static assets
//! - anything else        - Served from the static directory (`/` is `index.html`)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash trimming, applied around the whole
//!   router in [`crate::server`] so it runs before route matching

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use std::path::Path;
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory holding the homepage and its assets
pub fn app_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let static_files = ServeDir::new(static_dir.as_ref());

    Router::new()
        .route("/{short_code}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .nest_service("/static", static_files.clone())
        .fallback_service(static_files)
        .with_state(state)
        .layer(tracing::layer())
}
