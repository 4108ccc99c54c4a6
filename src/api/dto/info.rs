//! DTO for the info endpoint.

use crate::application::services::UrlInfo;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Basic information about a short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoResponse {
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

impl From<UrlInfo> for InfoResponse {
    fn from(info: UrlInfo) -> Self {
        Self {
            original_url: info.original_url,
            created_at: info.created_at,
            click_count: info.click_count,
        }
    }
}
