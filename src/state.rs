//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{AnalyticsService, LinkService};

/// Application state shared across requests.
///
/// Services are held behind `Arc` so the state stays cheap to clone per
/// request; repositories are injected as trait objects, which also lets
/// tests wire in mock or in-memory implementations.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub analytics_service: Arc<AnalyticsService>,
}

impl AppState {
    /// Creates the application state from constructed services.
    pub fn new(link_service: Arc<LinkService>, analytics_service: Arc<AnalyticsService>) -> Self {
        Self {
            link_service,
            analytics_service,
        }
    }
}
