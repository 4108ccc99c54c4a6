#![allow(dead_code)]

//! Shared test fixtures: in-memory repository implementations and state
//! construction. The in-memory repositories mirror the Postgres ordering and
//! cascade semantics so handler tests run without a database.

use async_trait::async_trait;
use axum::extract::ConnectInfo;
use chrono::{DateTime, Utc};
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::time::Duration;

use urlclip::application::services::{AnalyticsService, LinkService};
use urlclip::domain::entities::{Click, NewClick, NewUrl, Url};
use urlclip::domain::repositories::{ClickRepository, DailyClicks, UrlRepository};
use urlclip::error::AppError;
use urlclip::state::AppState;

/// In-memory [`UrlRepository`] backed by a `Mutex<Vec>`.
#[derive(Default)]
pub struct InMemoryUrlRepository {
    urls: Mutex<Vec<Url>>,
    next_id: AtomicI64,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self {
            urls: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Inserts a record with an explicit creation time and expiry.
    pub fn insert_at(
        &self,
        code: &str,
        original_url: &str,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Url {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let url = Url::new(
            id,
            code.to_string(),
            original_url.to_string(),
            created_at,
            expires_at,
        );
        self.urls.lock().unwrap().push(url.clone());
        url
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn create(&self, new_url: NewUrl) -> Result<Url, AppError> {
        let mut urls = self.urls.lock().unwrap();

        if urls.iter().any(|u| u.short_code == new_url.short_code) {
            return Err(AppError::conflict(
                "Short code already exists",
                serde_json::json!({ "code": new_url.short_code }),
            ));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let url = Url::new(
            id,
            new_url.short_code,
            new_url.original_url,
            Utc::now(),
            new_url.expires_at,
        );
        urls.push(url.clone());

        Ok(url)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Url>, AppError> {
        let urls = self.urls.lock().unwrap();
        Ok(urls.iter().find(|u| u.short_code == code).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Url>, AppError> {
        let mut urls = self.urls.lock().unwrap().clone();
        urls.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(urls)
    }

    async fn delete_by_code(&self, code: &str) -> Result<bool, AppError> {
        let mut urls = self.urls.lock().unwrap();
        let before = urls.len();
        urls.retain(|u| u.short_code != code);
        Ok(urls.len() < before)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// In-memory [`ClickRepository`]. Writes can be toggled to fail so tests can
/// exercise the best-effort click path.
#[derive(Default)]
pub struct InMemoryClickRepository {
    clicks: Mutex<Vec<Click>>,
    next_id: AtomicI64,
    fail_writes: AtomicBool,
}

impl InMemoryClickRepository {
    pub fn new() -> Self {
        Self {
            clicks: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Makes every subsequent `record` call fail.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Inserts a click with an explicit timestamp.
    pub fn insert_at(&self, url_id: i64, ip: &str, clicked_at: DateTime<Utc>) -> Click {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let click = Click::new(id, url_id, clicked_at, ip.to_string());
        self.clicks.lock().unwrap().push(click.clone());
        click
    }

    pub fn all(&self) -> Vec<Click> {
        self.clicks.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClickRepository for InMemoryClickRepository {
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::internal(
                "click store unavailable",
                serde_json::Value::Null,
            ));
        }

        Ok(self.insert_at(new_click.url_id, &new_click.ip, Utc::now()))
    }

    async fn count_for_url(&self, url_id: i64) -> Result<i64, AppError> {
        let clicks = self.clicks.lock().unwrap();
        Ok(clicks.iter().filter(|c| c.url_id == url_id).count() as i64)
    }

    async fn recent_ips(&self, url_id: i64, limit: i64) -> Result<Vec<String>, AppError> {
        let mut clicks: Vec<Click> = self
            .clicks
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.url_id == url_id)
            .cloned()
            .collect();
        clicks.sort_by(|a, b| b.clicked_at.cmp(&a.clicked_at).then(b.id.cmp(&a.id)));

        Ok(clicks
            .into_iter()
            .take(limit as usize)
            .map(|c| c.ip)
            .collect())
    }

    async fn daily_counts(&self, url_id: i64) -> Result<Vec<DailyClicks>, AppError> {
        let clicks = self.clicks.lock().unwrap();

        let mut by_day: std::collections::BTreeMap<chrono::NaiveDate, i64> =
            std::collections::BTreeMap::new();
        for click in clicks.iter().filter(|c| c.url_id == url_id) {
            *by_day.entry(click.clicked_at.date_naive()).or_insert(0) += 1;
        }

        Ok(by_day
            .into_iter()
            .rev()
            .map(|(day, count)| DailyClicks { day, count })
            .collect())
    }

    async fn list_for_urls(&self, url_ids: &[i64]) -> Result<Vec<Click>, AppError> {
        let mut clicks: Vec<Click> = self
            .clicks
            .lock()
            .unwrap()
            .iter()
            .filter(|c| url_ids.contains(&c.url_id))
            .cloned()
            .collect();
        clicks.sort_by(|a, b| b.clicked_at.cmp(&a.clicked_at).then(b.id.cmp(&a.id)));

        Ok(clicks)
    }
}

/// Builds an [`AppState`] over fresh in-memory repositories.
///
/// Returns the repositories alongside the state so tests can seed and
/// inspect them directly. The listing cache gets a long TTL so cache tests
/// are not timing-sensitive.
pub fn create_test_state() -> (
    AppState,
    Arc<InMemoryUrlRepository>,
    Arc<InMemoryClickRepository>,
) {
    let url_repo = Arc::new(InMemoryUrlRepository::new());
    let click_repo = Arc::new(InMemoryClickRepository::new());

    let link_service = Arc::new(LinkService::new(
        url_repo.clone(),
        click_repo.clone(),
        Duration::from_secs(300),
    ));
    let analytics_service = Arc::new(AnalyticsService::new(url_repo.clone(), click_repo.clone()));

    let state = AppState::new(link_service, analytics_service);

    (state, url_repo, click_repo)
}

/// Layer that injects a fixed `ConnectInfo` so handlers using the client
/// address work under `TestServer`.
#[derive(Clone)]
pub struct MockConnectInfoLayer {
    pub addr: SocketAddr,
}

impl MockConnectInfoLayer {
    pub fn new(addr: &str) -> Self {
        Self {
            addr: addr.parse().unwrap(),
        }
    }
}

impl Default for MockConnectInfoLayer {
    fn default() -> Self {
        Self::new("127.0.0.1:12345")
    }
}

impl<S> tower::Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService {
            inner,
            addr: self.addr,
        }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
    addr: SocketAddr,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        req.extensions_mut().insert(ConnectInfo(self.addr));
        self.inner.call(req)
    }
}
