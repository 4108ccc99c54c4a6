//! URL entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL record.
///
/// Maps a globally unique short code to its original URL. Expiry is evaluated
/// lazily at resolution time; expired records stay in the store until they
/// are explicitly deleted.
#[derive(Debug, Clone)]
pub struct Url {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Url {
    /// Creates a new Url instance.
    pub fn new(
        id: i64,
        short_code: String,
        original_url: String,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            short_code,
            original_url,
            created_at,
            expires_at,
        }
    }

    /// Returns true if the record has passed its expiry time.
    ///
    /// A record with no `expires_at` never expires. Expiry is strict: a
    /// record expiring exactly now is still considered live.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|e| e < Utc::now())
    }
}

/// Input data for creating a new URL record.
#[derive(Debug, Clone)]
pub struct NewUrl {
    pub short_code: String,
    pub original_url: String,
    pub expires_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn make_url(expires_at: Option<DateTime<Utc>>) -> Url {
        Url::new(
            1,
            "ab12CD34".to_string(),
            "https://example.com".to_string(),
            Utc::now(),
            expires_at,
        )
    }

    #[test]
    fn test_url_creation() {
        let url = make_url(None);

        assert_eq!(url.id, 1);
        assert_eq!(url.short_code, "ab12CD34");
        assert_eq!(url.original_url, "https://example.com");
        assert!(url.expires_at.is_none());
    }

    #[test]
    fn test_never_expires_without_expiry() {
        assert!(!make_url(None).is_expired());
    }

    #[test]
    fn test_expired_in_the_past() {
        let url = make_url(Some(Utc::now() - Duration::hours(1)));
        assert!(url.is_expired());
    }

    #[test]
    fn test_not_expired_in_the_future() {
        let url = make_url(Some(Utc::now() + Duration::hours(1)));
        assert!(!url.is_expired());
    }

    #[test]
    fn test_new_url_creation() {
        let new_url = NewUrl {
            short_code: "promo".to_string(),
            original_url: "https://rust-lang.org".to_string(),
            expires_at: None,
        };

        assert_eq!(new_url.short_code, "promo");
        assert_eq!(new_url.original_url, "https://rust-lang.org");
    }
}
