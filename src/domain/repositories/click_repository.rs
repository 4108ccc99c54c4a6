//! Repository trait for click recording and aggregation.

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Click count for a single calendar day.
///
/// Day boundaries follow the store's time-zone handling
/// (`date_trunc('day', ...)` in Postgres).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyClicks {
    pub day: NaiveDate,
    pub count: i64,
}

/// Repository interface for click tracking and analytics queries.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - In-memory implementation in `tests/common` for integration tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Records a new click event.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including a
    /// dangling `url_id` reference.
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Counts all clicks for a URL record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_for_url(&self, url_id: i64) -> Result<i64, AppError>;

    /// Returns the IPs of the most recent clicks, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn recent_ips(&self, url_id: i64, limit: i64) -> Result<Vec<String>, AppError>;

    /// Returns per-day click counts, ordered by day descending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn daily_counts(&self, url_id: i64) -> Result<Vec<DailyClicks>, AppError>;

    /// Fetches all clicks for a set of URL records, newest first.
    ///
    /// Used to populate the full listing in one round trip.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_urls(&self, url_ids: &[i64]) -> Result<Vec<Click>, AppError>;
}
