//! Click analytics service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::repositories::{ClickRepository, DailyClicks, UrlRepository};
use crate::error::AppError;

/// Number of IPs reported in `recentIps`.
const RECENT_IPS_LIMIT: i64 = 5;

/// Aggregated analytics for a single short code.
#[derive(Debug, Clone)]
pub struct Analytics {
    pub total_clicks: i64,
    pub recent_ips: Vec<String>,
    pub daily_clicks: Vec<DailyClicks>,
}

/// Service for aggregating click analytics per short code.
pub struct AnalyticsService {
    url_repository: Arc<dyn UrlRepository>,
    click_repository: Arc<dyn ClickRepository>,
}

impl AnalyticsService {
    /// Creates a new analytics service.
    pub fn new(
        url_repository: Arc<dyn UrlRepository>,
        click_repository: Arc<dyn ClickRepository>,
    ) -> Self {
        Self {
            url_repository,
            click_repository,
        }
    }

    /// Aggregates analytics for a short code: total clicks, the 5 most
    /// recent IPs (newest first), and a per-day histogram (newest day
    /// first). Available for expired links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is absent.
    pub async fn get_analytics(&self, code: &str) -> Result<Analytics, AppError> {
        let url = self
            .url_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Unknown code", json!({ "code": code })))?;

        let total_clicks = self.click_repository.count_for_url(url.id).await?;
        let recent_ips = self
            .click_repository
            .recent_ips(url.id, RECENT_IPS_LIMIT)
            .await?;
        let daily_clicks = self.click_repository.daily_counts(url.id).await?;

        Ok(Analytics {
            total_clicks,
            recent_ips,
            daily_clicks,
        })
    }
}
