//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
///
/// `expiresAt` is accepted as a string so that an invalid datetime surfaces
/// as a field-level validation error instead of a body parse failure; an
/// empty string is treated as absent.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The original URL to shorten (must be a valid absolute http/https URL).
    #[validate(url(message = "Invalid URL format"))]
    pub original_url: String,

    /// Optional custom alias, `[A-Za-z0-9_-]{1,20}`.
    pub alias: Option<String>,

    /// Optional RFC 3339 expiry timestamp.
    pub expires_at: Option<String>,
}

/// Response carrying the allocated short code.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_code: String,
}
