//! Handler for health check endpoint.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Reports that the process is up.
///
/// # Endpoint
///
/// `GET /api/health`
///
/// Does not touch the database; use `admin db check` for connectivity.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
