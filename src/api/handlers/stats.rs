//! Handler for short URL statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the stored record for a short code, including its click count.
///
/// # Endpoint
///
/// `GET /api/stats/{short_code}`
///
/// Expired links are still reported.
///
/// # Errors
///
/// Returns 404 Not Found if the code was never created.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(short_code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let short_url = state.stats_service.get_stats(&short_code).await?;

    Ok(Json(short_url.into()))
}
