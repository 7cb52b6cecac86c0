//! Handler for short URL redirect.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::client_ip;

/// "Link Not Found" page, rendered from `templates/not_found.html`.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
struct NotFoundTemplate {
    short_code: String,
}

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{short_code}`
///
/// # Request Flow
///
/// 1. Resolve the code, skipping expired links
/// 2. The link service queues a click counter increment
/// 3. Queue a click record with IP, user agent and referrer
/// 4. Return 302 Found
///
/// Both click tasks are fire-and-forget; a full queue drops them.
///
/// # Errors
///
/// Unknown and expired codes render a 404 HTML page. Database failures
/// return the JSON error body.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(short_code): Path<String>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let long_url = match state.link_service.resolve(&short_code).await {
        Ok(long_url) => long_url,
        Err(e) if e.is_not_found() => {
            tracing::debug!(short_code = %short_code, "short URL not found");
            return Ok((StatusCode::NOT_FOUND, NotFoundTemplate { short_code }).into_response());
        }
        Err(e) => return Err(e),
    };

    let event = ClickEvent::new(
        short_code,
        Some(client_ip(&headers, peer)),
        headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok()),
        headers.get(header::REFERER).and_then(|v| v.to_str().ok()),
    );

    tracing::info!(short_code = %event.short_code, long_url = %long_url, "redirect");
    state.clicks.record(event);

    Ok((StatusCode::FOUND, [(header::LOCATION, long_url)]).into_response())
}
