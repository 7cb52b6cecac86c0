#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::extract::connect_info::MockConnectInfo;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use shortlink::domain::click_worker::{ClickDispatcher, run_click_worker};
use shortlink::domain::entities::{Click, NewClick, NewShortUrl, ShortUrl};
use shortlink::domain::repositories::{ClickRepository, UrlRepository};
use shortlink::error::AppError;
use shortlink::routes::app_router;
use shortlink::state::AppState;

pub const BASE_URL: &str = "http://sho.rt";
pub const PEER_ADDR: &str = "203.0.113.7:54321";

/// `urls` table kept in memory. Inserts are atomic per code, like the
/// unique constraint they stand in for.
#[derive(Default)]
pub struct InMemoryUrlRepository {
    rows: DashMap<String, ShortUrl>,
    next_id: AtomicI64,
}

impl InMemoryUrlRepository {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, short_code: &str) -> Option<ShortUrl> {
        self.rows.get(short_code).map(|row| row.clone())
    }

    pub fn set_expires_at(&self, short_code: &str, expires_at: Option<DateTime<Utc>>) {
        if let Some(mut row) = self.rows.get_mut(short_code) {
            row.expires_at = expires_at;
        }
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn create(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        match self.rows.entry(new_url.short_code.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "urls_short_code_key" }),
            )),
            Entry::Vacant(slot) => {
                let row = ShortUrl {
                    id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
                    short_code: new_url.short_code,
                    long_url: new_url.long_url,
                    created_by_ip: new_url.created_by_ip,
                    created_at: Utc::now(),
                    expires_at: new_url.expires_at,
                    clicks: 0,
                };
                slot.insert(row.clone());
                Ok(row)
            }
        }
    }

    async fn exists(&self, short_code: &str) -> Result<bool, AppError> {
        Ok(self.rows.contains_key(short_code))
    }

    async fn find_active(
        &self,
        short_code: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<ShortUrl>, AppError> {
        Ok(self.get(short_code).filter(|row| !row.is_expired_at(now)))
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<ShortUrl>, AppError> {
        Ok(self.get(short_code))
    }

    async fn increment_clicks(&self, short_code: &str) -> Result<(), AppError> {
        if let Some(mut row) = self.rows.get_mut(short_code) {
            row.clicks += 1;
        }
        Ok(())
    }
}

/// Append-only `clicks` table kept in memory.
#[derive(Default)]
pub struct InMemoryClickRepository {
    rows: DashMap<i64, Click>,
    next_id: AtomicI64,
}

impl InMemoryClickRepository {
    pub fn for_code(&self, short_code: &str) -> Vec<Click> {
        let mut clicks: Vec<Click> = self
            .rows
            .iter()
            .filter(|row| row.short_code == short_code)
            .map(|row| row.clone())
            .collect();
        clicks.sort_by_key(|click| click.id);
        clicks
    }
}

#[async_trait]
impl ClickRepository for InMemoryClickRepository {
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let click = Click {
            id,
            short_code: new_click.short_code,
            clicked_at: Utc::now(),
            ip_address: new_click.ip_address,
            user_agent: new_click.user_agent,
            referrer: new_click.referrer,
            country_code: None,
        };
        self.rows.insert(id, click.clone());
        Ok(click)
    }

    async fn count_by_code(&self, short_code: &str) -> Result<i64, AppError> {
        let count = self
            .rows
            .iter()
            .filter(|row| row.short_code == short_code)
            .count();
        Ok(count as i64)
    }
}

/// `urls` table whose every operation fails like an unreachable database.
pub struct FailingUrlRepository;

fn storage_down() -> AppError {
    AppError::persistence(
        "connection refused",
        json!({ "cause": "connection refused" }),
    )
}

#[async_trait]
impl UrlRepository for FailingUrlRepository {
    async fn create(&self, _new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        Err(storage_down())
    }

    async fn exists(&self, _short_code: &str) -> Result<bool, AppError> {
        Ok(false)
    }

    async fn find_active(
        &self,
        _short_code: &str,
        _now: DateTime<Utc>,
    ) -> Result<Option<ShortUrl>, AppError> {
        Err(storage_down())
    }

    async fn find_by_code(&self, _short_code: &str) -> Result<Option<ShortUrl>, AppError> {
        Err(storage_down())
    }

    async fn increment_clicks(&self, _short_code: &str) -> Result<(), AppError> {
        Err(storage_down())
    }
}

/// Router over an already-built state, with the same fixed peer address.
pub fn server_for(state: AppState) -> TestServer {
    let peer: SocketAddr = PEER_ADDR.parse().unwrap();
    let router = app_router(state, "static").layer(MockConnectInfo(peer));
    TestServer::new(router).unwrap()
}

/// Application state over in-memory repositories, with a running click worker.
pub struct TestContext {
    pub state: AppState,
    pub urls: Arc<InMemoryUrlRepository>,
    pub clicks: Arc<InMemoryClickRepository>,
}

impl TestContext {
    pub fn new() -> Self {
        let urls = Arc::new(InMemoryUrlRepository::default());
        let clicks = Arc::new(InMemoryClickRepository::default());

        let (dispatcher, rx) = ClickDispatcher::channel(1_000);
        tokio::spawn(run_click_worker(rx, urls.clone(), clicks.clone(), 4));

        let state = AppState::new(urls.clone(), clicks.clone(), dispatcher, BASE_URL, 6);

        Self {
            state,
            urls,
            clicks,
        }
    }

    /// Full application router with a fixed peer address.
    pub fn router(&self) -> Router {
        let peer: SocketAddr = PEER_ADDR.parse().unwrap();
        app_router(self.state.clone(), "static").layer(MockConnectInfo(peer))
    }

    pub fn server(&self) -> TestServer {
        server_for(self.state.clone())
    }

    /// Waits until every queued click task has been applied.
    pub async fn flush_clicks(&self) {
        self.state.clicks.flush().await;
    }

    /// Creates a short URL through the service layer and returns its code.
    pub async fn create(&self, long_url: &str, expires_in_hours: Option<u32>) -> String {
        self.state
            .link_service
            .create_short_url(long_url, Some("198.51.100.1".to_string()), expires_in_hours)
            .await
            .unwrap()
            .short_code
    }
}
