//! DTO for short URL statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ShortUrl;

/// Stored record for a short code, expired or not.
///
/// The creator's IP is kept in storage but never returned here.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub id: i64,
    pub short_code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    pub clicks: i64,
}

impl From<ShortUrl> for StatsResponse {
    fn from(url: ShortUrl) -> Self {
        Self {
            id: url.id,
            short_code: url.short_code,
            long_url: url.long_url,
            created_at: url.created_at,
            expires_at: url.expires_at,
            clicks: url.clicks,
        }
    }
}
