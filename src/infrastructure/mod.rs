//! Infrastructure layer for external integrations.
//!
//! - [`cache`] - In-process listing cache
//! - [`persistence`] - PostgreSQL repository implementations

pub mod cache;
pub mod persistence;
