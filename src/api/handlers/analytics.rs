//! Handler for the analytics endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::analytics::AnalyticsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns aggregated click analytics for a short code.
///
/// # Endpoint
///
/// `GET /analytics/{code}`
///
/// Reports total clicks, the 5 most recent IPs (newest first), and a
/// per-day histogram ordered newest day first.
pub async fn analytics_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let analytics = state.analytics_service.get_analytics(&code).await?;

    Ok(Json(analytics.into()))
}
