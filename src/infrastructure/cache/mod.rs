//! In-process caching.
//!
//! - [`timed_cache`] - Keyed cache with explicit entry timestamps

pub mod timed_cache;

pub use timed_cache::TimedCache;
