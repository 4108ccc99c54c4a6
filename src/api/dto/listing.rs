//! DTOs for the full listing endpoint.

use crate::application::services::UrlWithClicks;
use crate::domain::entities::Click;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One URL record with its click history.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingItem {
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub clicks: Vec<ClickItem>,
}

/// One recorded click.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickItem {
    pub clicked_at: DateTime<Utc>,
    pub ip: String,
}

impl From<Click> for ClickItem {
    fn from(click: Click) -> Self {
        Self {
            clicked_at: click.clicked_at,
            ip: click.ip,
        }
    }
}

impl From<UrlWithClicks> for ListingItem {
    fn from(entry: UrlWithClicks) -> Self {
        Self {
            short_code: entry.url.short_code,
            original_url: entry.url.original_url,
            created_at: entry.url.created_at,
            expires_at: entry.url.expires_at,
            clicks: entry.clicks.into_iter().map(ClickItem::from).collect(),
        }
    }
}
