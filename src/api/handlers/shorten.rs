//! Handler for the shorten endpoint.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "originalUrl": "https://example.com", "alias": "promo", "expiresAt": "2026-12-31T00:00:00Z" }
/// ```
///
/// `alias` and `expiresAt` are optional; an empty `expiresAt` string is
/// treated as absent.
///
/// # Errors
///
/// Returns 400 for a malformed URL, alias, or expiry timestamp, and 409 if
/// the alias is already taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let expires_at = parse_expires_at(payload.expires_at.as_deref())?;

    let url = state
        .link_service
        .create_short_url(payload.original_url, payload.alias, expires_at)
        .await?;

    Ok(Json(ShortenResponse {
        short_code: url.short_code,
    }))
}

/// Parses the optional expiry field; empty strings count as absent.
fn parse_expires_at(raw: Option<&str>) -> Result<Option<DateTime<Utc>>, AppError> {
    match raw {
        None | Some("") => Ok(None),
        Some(value) => DateTime::parse_from_rfc3339(value)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|e| {
                AppError::bad_request(
                    "Invalid expiry timestamp",
                    json!({ "field": "expiresAt", "reason": e.to_string() }),
                )
            }),
    }
}
