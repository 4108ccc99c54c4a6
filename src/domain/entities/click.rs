//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A click event recorded when a shortened link is resolved.
///
/// Clicks belong to exactly one URL record and are cascade-deleted with it.
#[derive(Debug, Clone)]
pub struct Click {
    pub id: i64,
    pub url_id: i64,
    pub clicked_at: DateTime<Utc>,
    pub ip: String,
}

impl Click {
    /// Creates a new Click instance.
    pub fn new(id: i64, url_id: i64, clicked_at: DateTime<Utc>, ip: String) -> Self {
        Self {
            id,
            url_id,
            clicked_at,
            ip,
        }
    }
}

/// Input data for recording a new click event.
///
/// The `url_id` must reference an existing URL record; the timestamp is
/// assigned by the database.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub url_id: i64,
    pub ip: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_creation() {
        let now = Utc::now();
        let click = Click::new(1, 42, now, "192.168.1.1".to_string());

        assert_eq!(click.id, 1);
        assert_eq!(click.url_id, 42);
        assert_eq!(click.clicked_at, now);
        assert_eq!(click.ip, "192.168.1.1");
    }

    #[test]
    fn test_new_click_creation() {
        let new_click = NewClick {
            url_id: 99,
            ip: "10.0.0.1".to_string(),
        };

        assert_eq!(new_click.url_id, 99);
        assert_eq!(new_click.ip, "10.0.0.1");
    }
}
