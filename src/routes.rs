//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET    /all`               - Full listing with click histories
//! - `POST   /shorten`           - Create a short link
//! - `GET    /info/{code}`       - Link info (URL, creation time, click count)
//! - `GET    /analytics/{code}`  - Click analytics
//! - `DELETE /delete/{code}`     - Delete a link and its clicks
//! - `GET    /health`            - Health check
//! - `GET    /{code}`            - Short link redirect
//!
//! Static segments win over the `/{code}` capture, so the service paths are
//! never shadowed by short codes.

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api::handlers::{
    analytics_handler, delete_handler, health_handler, info_handler, listing_handler,
    redirect_handler, shorten_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/all", get(listing_handler))
        .route("/shorten", post(shorten_handler))
        .route("/info/{code}", get(info_handler))
        .route("/analytics/{code}", get(analytics_handler))
        .route("/delete/{code}", delete(delete_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
