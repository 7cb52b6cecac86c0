//! Background click tasks.

use tokio::sync::oneshot;

use crate::domain::entities::NewClick;

/// Request metadata captured for one successful redirect.
///
/// Built in the redirect handler and handed to the click worker so the
/// response never waits on the analytics insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub short_code: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
}

impl ClickEvent {
    /// Creates a new click event. Empty header values are stored as `None`.
    pub fn new(
        short_code: String,
        ip_address: Option<String>,
        user_agent: Option<&str>,
        referrer: Option<&str>,
    ) -> Self {
        Self {
            short_code,
            ip_address: ip_address.filter(|ip| !ip.is_empty()),
            user_agent: user_agent.filter(|s| !s.is_empty()).map(str::to_string),
            referrer: referrer.filter(|s| !s.is_empty()).map(str::to_string),
        }
    }
}

impl From<ClickEvent> for NewClick {
    fn from(event: ClickEvent) -> Self {
        NewClick {
            short_code: event.short_code,
            ip_address: event.ip_address,
            user_agent: event.user_agent,
            referrer: event.referrer,
        }
    }
}

/// Unit of work for the click worker.
#[derive(Debug)]
pub enum ClickTask {
    /// Bump `urls.clicks` for a resolved code.
    Increment { short_code: String },
    /// Insert one analytics row.
    Record(ClickEvent),
    /// Reply once every task submitted before this one has finished.
    Flush(oneshot::Sender<()>),
}
