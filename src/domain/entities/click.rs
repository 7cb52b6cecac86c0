//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A click recorded when a short link is followed.
///
/// `short_code` is not checked against `urls`; rows for codes that no longer
/// (or never did) resolve are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Click {
    pub id: i64,
    pub short_code: String,
    pub clicked_at: DateTime<Utc>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
    pub country_code: Option<String>,
}

/// Input data for recording a click. The timestamp is set by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClick {
    pub short_code: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
}
