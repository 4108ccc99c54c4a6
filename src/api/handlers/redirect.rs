//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    response::Redirect,
};
use std::net::SocketAddr;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Records a click (timestamp + client IP) before answering; a failed click
/// write never blocks the redirect. Expired codes return the same 404 as
/// unknown ones.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Redirect, AppError> {
    let original_url = state
        .link_service
        .resolve(&code, addr.ip().to_string())
        .await?;

    Ok(Redirect::temporary(&original_url))
}
