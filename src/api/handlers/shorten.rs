//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{ConnectInfo, State, rejection::JsonRejection},
    http::HeaderMap,
};
use serde_json::json;
use std::net::SocketAddr;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::client_ip;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/very/long/path", "expires_in_hours": 24 }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "short_code": "aB3xYz",
///   "short_url": "http://localhost:8080/aB3xYz",
///   "long_url": "https://example.com/very/long/path"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed body, an invalid URL, an
/// out-of-range expiry, when no free code could be found, or when the
/// insert fails (with the message "Internal server error").
pub async fn shorten_handler(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::invalid_input(
            "Invalid request",
            json!({ "reason": rejection.body_text() }),
        )
    })?;
    payload.validate()?;

    let expires_in_hours = payload
        .expires_in_hours
        .map(u32::try_from)
        .transpose()
        .map_err(|_| AppError::invalid_input("Invalid expiry", json!({})))?;

    let creator_ip = client_ip(&headers, peer);

    let short_url = state
        .link_service
        .create_short_url(&payload.url, Some(creator_ip), expires_in_hours)
        .await
        .map_err(|e| match e {
            // Every failure on this route is a 400; storage details stay opaque.
            AppError::Persistence { details, .. } => {
                AppError::invalid_input("Internal server error", details)
            }
            other => other,
        })?;

    tracing::info!(
        short_code = %short_url.short_code,
        long_url = %short_url.long_url,
        "short URL created"
    );

    Ok(Json(ShortenResponse {
        success: true,
        short_url: state.link_service.short_url(&short_url.short_code),
        short_code: short_url.short_code,
        long_url: short_url.long_url,
    }))
}
