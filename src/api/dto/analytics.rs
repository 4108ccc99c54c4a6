//! DTOs for the analytics endpoint.

use crate::application::services::Analytics;
use crate::domain::repositories::DailyClicks;
use chrono::NaiveDate;
use serde::Serialize;

/// Aggregated click analytics for a short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub total_clicks: i64,
    pub recent_ips: Vec<String>,
    pub daily_clicks: Vec<DailyClicksItem>,
}

/// Click count for one calendar day.
#[derive(Debug, Serialize)]
pub struct DailyClicksItem {
    pub day: NaiveDate,
    pub count: i64,
}

impl From<DailyClicks> for DailyClicksItem {
    fn from(daily: DailyClicks) -> Self {
        Self {
            day: daily.day,
            count: daily.count,
        }
    }
}

impl From<Analytics> for AnalyticsResponse {
    fn from(analytics: Analytics) -> Self {
        Self {
            total_clicks: analytics.total_clicks,
            recent_ips: analytics.recent_ips,
            daily_clicks: analytics
                .daily_clicks
                .into_iter()
                .map(DailyClicksItem::from)
                .collect(),
        }
    }
}
