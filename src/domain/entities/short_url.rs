//! Short URL entity.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A stored short-code mapping.
///
/// `clicks` is bumped by the background click worker after each successful
/// resolution, so a freshly read value may lag behind in-flight redirects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct ShortUrl {
    pub id: i64,
    pub short_code: String,
    pub long_url: String,
    #[serde(skip)]
    pub created_by_ip: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    pub clicks: i64,
}

impl ShortUrl {
    /// Returns true if the link has an expiry at or before `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }

    /// Returns true if the link has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Input data for creating a short URL.
#[derive(Debug, Clone)]
pub struct NewShortUrl {
    pub short_code: String,
    pub long_url: String,
    pub created_by_ip: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}
