//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{LinkService, StatsService};
use crate::domain::click_worker::ClickDispatcher;
use crate::domain::repositories::{ClickRepository, UrlRepository};

/// Services and the click dispatcher shared across requests.
///
/// Cloning is cheap; every field is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn UrlRepository>>,
    pub stats_service: Arc<StatsService<dyn UrlRepository, dyn ClickRepository>>,
    pub clicks: ClickDispatcher,
}

impl AppState {
    /// Wires the services around the given repositories.
    ///
    /// The caller owns the receiving end of `clicks` and is responsible for
    /// running the click worker on it.
    pub fn new(
        url_repository: Arc<dyn UrlRepository>,
        click_repository: Arc<dyn ClickRepository>,
        clicks: ClickDispatcher,
        base_url: impl Into<String>,
        code_length: usize,
    ) -> Self {
        let link_service = LinkService::new(url_repository.clone(), clicks.clone(), base_url)
            .with_code_length(code_length);
        let stats_service = StatsService::new(url_repository, click_repository);

        Self {
            link_service: Arc::new(link_service),
            stats_service: Arc::new(stats_service),
            clicks,
        }
    }
}
