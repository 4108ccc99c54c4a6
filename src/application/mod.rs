//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers:
//!
//! - [`services::link_service::LinkService`] - Short code allocation, resolution, lifecycle
//! - [`services::analytics_service::AnalyticsService`] - Click aggregation

pub mod services;
