//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx
//! runtime-checked queries.
//!
//! - [`PgUrlRepository`] - URL record storage and retrieval
//! - [`PgClickRepository`] - Click recording and aggregation

pub mod pg_click_repository;
pub mod pg_url_repository;

pub use pg_click_repository::PgClickRepository;
pub use pg_url_repository::PgUrlRepository;
