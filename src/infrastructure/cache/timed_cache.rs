//! Keyed in-process cache with per-entry timestamps.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct Entry<T> {
    stored_at: Instant,
    value: T,
}

/// A small keyed cache with manual timeout semantics.
///
/// Each entry carries the instant it was stored; expiry is checked on read
/// and stale entries are dropped at that point. A TTL of zero means entries
/// never expire. Writers invalidate explicitly.
pub struct TimedCache<T> {
    ttl: Duration,
    entries: Mutex<HashMap<String, Entry<T>>>,
}

impl<T: Clone> TimedCache<T> {
    /// Creates a cache with the given time-to-live. `Duration::ZERO`
    /// disables expiry.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached value for `key` if present and fresh.
    ///
    /// A stale entry is removed and treated as a miss.
    pub fn get(&self, key: &str) -> Option<T> {
        let mut entries = self.entries.lock().expect("cache lock poisoned");

        let fresh = match entries.get(key) {
            Some(entry) => self.ttl.is_zero() || entry.stored_at.elapsed() <= self.ttl,
            None => return None,
        };

        if !fresh {
            entries.remove(key);
            return None;
        }

        entries.get(key).map(|e| e.value.clone())
    }

    /// Stores `value` under `key`, stamping it with the current instant.
    pub fn insert(&self, key: impl Into<String>, value: T) {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        entries.insert(
            key.into(),
            Entry {
                stored_at: Instant::now(),
                value,
            },
        );
    }

    /// Removes the entry for `key`, if any.
    pub fn invalidate(&self, key: &str) {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        entries.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_miss_on_empty_cache() {
        let cache: TimedCache<String> = TimedCache::new(Duration::from_secs(30));
        assert!(cache.get("all").is_none());
    }

    #[test]
    fn test_hit_within_ttl() {
        let cache = TimedCache::new(Duration::from_secs(30));
        cache.insert("all", vec![1, 2, 3]);

        assert_eq!(cache.get("all"), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_stale_entry_is_dropped_on_read() {
        let cache = TimedCache::new(Duration::from_millis(10));
        cache.insert("all", "listing".to_string());

        sleep(Duration::from_millis(25));

        assert!(cache.get("all").is_none());
        // Entry is gone, not just hidden.
        cache.insert("all", "fresh".to_string());
        assert_eq!(cache.get("all"), Some("fresh".to_string()));
    }

    #[test]
    fn test_zero_ttl_never_expires() {
        let cache = TimedCache::new(Duration::ZERO);
        cache.insert("all", 7u32);

        sleep(Duration::from_millis(15));

        assert_eq!(cache.get("all"), Some(7));
    }

    #[test]
    fn test_invalidate_removes_entry() {
        let cache = TimedCache::new(Duration::from_secs(30));
        cache.insert("all", 1u32);

        cache.invalidate("all");

        assert!(cache.get("all").is_none());
    }

    #[test]
    fn test_insert_overwrites_and_restamps() {
        let cache = TimedCache::new(Duration::from_secs(30));
        cache.insert("all", 1u32);
        cache.insert("all", 2u32);

        assert_eq!(cache.get("all"), Some(2));
    }
}
