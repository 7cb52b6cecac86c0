//! Stats lookup for short URLs.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::ShortUrl;
use crate::domain::repositories::{ClickRepository, UrlRepository};
use crate::error::AppError;

/// Service for reading stored link records and their click analytics.
pub struct StatsService<U: UrlRepository + ?Sized, C: ClickRepository + ?Sized> {
    url_repository: Arc<U>,
    click_repository: Arc<C>,
}

impl<U: UrlRepository + ?Sized, C: ClickRepository + ?Sized> StatsService<U, C> {
    /// Creates a new statistics service.
    pub fn new(url_repository: Arc<U>, click_repository: Arc<C>) -> Self {
        Self {
            url_repository,
            click_repository,
        }
    }

    /// Returns the stored record for a code, expired or not.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code was never created.
    /// Returns [`AppError::Persistence`] on database errors.
    pub async fn get_stats(&self, short_code: &str) -> Result<ShortUrl, AppError> {
        self.url_repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "short_code": short_code }))
            })
    }

    /// Number of click rows recorded for a code.
    ///
    /// Can differ from the stored counter: the two are written by separate
    /// background tasks and either may be dropped.
    pub async fn recorded_clicks(&self, short_code: &str) -> Result<i64, AppError> {
        self.click_repository.count_by_code(short_code).await
    }
}
