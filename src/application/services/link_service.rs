//! Short URL creation and resolution.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use tracing::{debug, warn};

use crate::domain::click_worker::ClickDispatcher;
use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code};
use crate::utils::url_validator::validate_url;

/// Attempts made to find a free code before giving up.
pub const MAX_CODE_ATTEMPTS: usize = 10;

/// Service for creating and resolving short URLs.
///
/// Uniqueness is checked before the insert as a fast path; the unique
/// constraint on `short_code` is what actually guarantees it, and an insert
/// rejected by that constraint is retried with a fresh code.
pub struct LinkService<R: UrlRepository + ?Sized> {
    repository: Arc<R>,
    clicks: ClickDispatcher,
    base_url: String,
    code_length: usize,
}

impl<R: UrlRepository + ?Sized> LinkService<R> {
    /// Creates a new link service.
    ///
    /// `base_url` is the externally visible origin used to build short links.
    pub fn new(repository: Arc<R>, clicks: ClickDispatcher, base_url: impl Into<String>) -> Self {
        Self {
            repository,
            clicks,
            base_url: base_url.into(),
            code_length: DEFAULT_CODE_LENGTH,
        }
    }

    /// Overrides the generated code length.
    pub fn with_code_length(mut self, code_length: usize) -> Self {
        self.code_length = code_length;
        self
    }

    /// Creates a short URL.
    ///
    /// `expires_in_hours` of `None` or `Some(0)` means the link never expires.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if the URL is not an absolute
    /// http/https URL or the expiry is out of range.
    /// Returns [`AppError::CodeExhausted`] after [`MAX_CODE_ATTEMPTS`] collisions.
    /// Returns [`AppError::Persistence`] on database errors.
    pub async fn create_short_url(
        &self,
        long_url: &str,
        creator_ip: Option<String>,
        expires_in_hours: Option<u32>,
    ) -> Result<ShortUrl, AppError> {
        validate_url(long_url).map_err(|e| {
            AppError::invalid_input("Invalid URL", json!({ "reason": e.to_string() }))
        })?;

        let expires_at = expires_at_from_hours(expires_in_hours, Utc::now())?;

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let short_code = generate_code(self.code_length);

            if self.repository.exists(&short_code).await? {
                debug!(attempt, "short code collision, retrying");
                continue;
            }

            let new_url = NewShortUrl {
                short_code,
                long_url: long_url.to_string(),
                created_by_ip: creator_ip.clone(),
                expires_at,
            };

            match self.repository.create(new_url).await {
                Ok(created) => return Ok(created),
                Err(AppError::Conflict { .. }) => {
                    warn!(attempt, "short code taken between check and insert, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::CodeExhausted {
            attempts: MAX_CODE_ATTEMPTS,
        })
    }

    /// Resolves a code to its destination and schedules a click increment.
    ///
    /// The increment runs on the click worker; this call does not wait for it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown or expired.
    /// Returns [`AppError::Persistence`] on database errors.
    pub async fn resolve(&self, short_code: &str) -> Result<String, AppError> {
        let short_url = self
            .repository
            .find_active(short_code, Utc::now())
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Short URL not found or expired",
                    json!({ "short_code": short_code }),
                )
            })?;

        self.clicks.increment(&short_url.short_code);

        Ok(short_url.long_url)
    }

    /// Builds the full short link for a code.
    pub fn short_url(&self, short_code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), short_code)
    }
}

/// Converts "hours from now" into an absolute expiry.
fn expires_at_from_hours(
    hours: Option<u32>,
    now: DateTime<Utc>,
) -> Result<Option<DateTime<Utc>>, AppError> {
    match hours {
        None | Some(0) => Ok(None),
        Some(hours) => now
            .checked_add_signed(Duration::hours(i64::from(hours)))
            .map(Some)
            .ok_or_else(|| {
                AppError::invalid_input(
                    "expires_in_hours is out of range",
                    json!({ "expires_in_hours": hours }),
                )
            }),
    }
}
