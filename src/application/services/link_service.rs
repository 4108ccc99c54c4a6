//! Short link allocation, resolution, and lifecycle service.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::entities::{Click, NewClick, NewUrl, Url};
use crate::domain::repositories::{ClickRepository, UrlRepository};
use crate::error::AppError;
use crate::infrastructure::cache::TimedCache;
use crate::utils::code_generator::{generate_code, validate_alias};

/// Key under which the full listing is cached.
const LISTING_CACHE_KEY: &str = "all";

/// Summary returned by [`LinkService::get_info`].
#[derive(Debug, Clone)]
pub struct UrlInfo {
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

/// A URL record populated with all of its clicks.
#[derive(Debug, Clone)]
pub struct UrlWithClicks {
    pub url: Url,
    pub clicks: Vec<Click>,
}

/// Service for allocating short codes and resolving them back to URLs.
///
/// Owns the listing cache: `list_all` serves from it, while `create_short_url`
/// and `delete` invalidate it.
pub struct LinkService {
    url_repository: Arc<dyn UrlRepository>,
    click_repository: Arc<dyn ClickRepository>,
    listing_cache: TimedCache<Vec<UrlWithClicks>>,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `listing_ttl` controls how long the `/all` listing stays cached;
    /// `Duration::ZERO` caches until invalidation.
    pub fn new(
        url_repository: Arc<dyn UrlRepository>,
        click_repository: Arc<dyn ClickRepository>,
        listing_ttl: Duration,
    ) -> Self {
        Self {
            url_repository,
            click_repository,
            listing_cache: TimedCache::new(listing_ttl),
        }
    }

    /// Creates a short URL record.
    ///
    /// # Code Allocation
    ///
    /// - With `alias`: the alias is validated and used verbatim; if it is
    ///   already taken the call fails with Conflict and is never retried.
    /// - Without `alias`: an 8-character alphanumeric code is drawn at
    ///   random, redrawing on collision up to 10 times.
    ///
    /// The existence pre-check is inherently racy under concurrent creates;
    /// the database unique constraint is the backstop and also surfaces as
    /// Conflict.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed URL or alias,
    /// [`AppError::Conflict`] for a taken alias, [`AppError::Internal`] when
    /// random draws keep colliding or on database errors.
    pub async fn create_short_url(
        &self,
        original_url: String,
        alias: Option<String>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Url, AppError> {
        validate_original_url(&original_url)?;

        let code = if let Some(alias) = alias {
            validate_alias(&alias)?;

            if self.url_repository.find_by_code(&alias).await?.is_some() {
                return Err(AppError::conflict(
                    "Alias already taken",
                    json!({ "alias": alias }),
                ));
            }

            alias
        } else {
            self.generate_unique_code().await?
        };

        let url = self
            .url_repository
            .create(NewUrl {
                short_code: code,
                original_url,
                expires_at,
            })
            .await?;

        self.listing_cache.invalidate(LISTING_CACHE_KEY);

        Ok(url)
    }

    /// Resolves a short code to its original URL, recording the click.
    ///
    /// Expired codes answer exactly like missing ones so callers cannot
    /// probe whether a code ever existed. The click write happens in the
    /// request path but is best-effort: a failure is logged and the redirect
    /// still succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is absent or expired.
    pub async fn resolve(&self, code: &str, ip: String) -> Result<String, AppError> {
        let url = self
            .url_repository
            .find_by_code(code)
            .await?
            .filter(|u| !u.is_expired())
            .ok_or_else(|| AppError::not_found("Unknown code", json!({ "code": code })))?;

        if let Err(e) = self
            .click_repository
            .record(NewClick { url_id: url.id, ip })
            .await
        {
            tracing::warn!(error = %e, code, "failed to record click");
        }

        Ok(url.original_url)
    }

    /// Returns basic info for a short code: original URL, creation time, and
    /// total click count. Expired records are still reported.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is absent.
    pub async fn get_info(&self, code: &str) -> Result<UrlInfo, AppError> {
        let url = self
            .url_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Unknown code", json!({ "code": code })))?;

        let click_count = self.click_repository.count_for_url(url.id).await?;

        Ok(UrlInfo {
            original_url: url.original_url,
            created_at: url.created_at,
            click_count,
        })
    }

    /// Lists all URL records with their clicks, newest record first.
    ///
    /// Served through the listing cache; a fresh cached listing skips the
    /// store entirely.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_all(&self) -> Result<Vec<UrlWithClicks>, AppError> {
        if let Some(listing) = self.listing_cache.get(LISTING_CACHE_KEY) {
            return Ok(listing);
        }

        let urls = self.url_repository.list_all().await?;
        let ids: Vec<i64> = urls.iter().map(|u| u.id).collect();
        let clicks = self.click_repository.list_for_urls(&ids).await?;

        let mut by_url: std::collections::HashMap<i64, Vec<Click>> = std::collections::HashMap::new();
        for click in clicks {
            by_url.entry(click.url_id).or_default().push(click);
        }

        let listing: Vec<UrlWithClicks> = urls
            .into_iter()
            .map(|url| {
                let clicks = by_url.remove(&url.id).unwrap_or_default();
                UrlWithClicks { url, clicks }
            })
            .collect();

        self.listing_cache.insert(LISTING_CACHE_KEY, listing.clone());

        Ok(listing)
    }

    /// Deletes a URL record; its clicks are cascade-deleted by the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is absent.
    pub async fn delete(&self, code: &str) -> Result<(), AppError> {
        let deleted = self.url_repository.delete_by_code(code).await?;

        if !deleted {
            return Err(AppError::not_found("Unknown code", json!({ "code": code })));
        }

        self.listing_cache.invalidate(LISTING_CACHE_KEY);

        Ok(())
    }

    /// Checks store connectivity for the health endpoint.
    pub async fn ping_store(&self) -> Result<(), AppError> {
        self.url_repository.ping().await
    }

    /// Draws random codes until one is free, up to 10 attempts.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let code = generate_code();

            if self.url_repository.find_by_code(&code).await?.is_none() {
                return Ok(code);
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}

/// Validates that the input is an absolute http/https URL.
fn validate_original_url(input: &str) -> Result<(), AppError> {
    let parsed = url::Url::parse(input).map_err(|e| {
        AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(AppError::bad_request(
            "Only http/https URLs are allowed",
            json!({ "scheme": other }),
        )),
    }
}
