//! Repository trait for short URL storage.

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Storage for short URL mappings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new short URL with zero clicks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code is already taken.
    /// Returns [`AppError::Persistence`] on database errors.
    async fn create(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Returns true if any row, expired or not, uses this code.
    async fn exists(&self, short_code: &str) -> Result<bool, AppError>;

    /// Finds a link that has not expired as of `now`.
    ///
    /// Expired and missing rows both yield `Ok(None)`.
    async fn find_active(
        &self,
        short_code: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<ShortUrl>, AppError>;

    /// Finds a link regardless of expiry.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Adds one to the stored click counter.
    ///
    /// Unknown codes are a no-op.
    async fn increment_clicks(&self, short_code: &str) -> Result<(), AppError>;
}
