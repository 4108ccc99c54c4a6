//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde with camelCase field names on the wire; requests are
//! validated with the validator derive.

pub mod analytics;
pub mod health;
pub mod info;
pub mod listing;
pub mod shorten;
