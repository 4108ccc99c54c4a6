//! Handler for the link info endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::info::InfoResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns basic information for a short code.
///
/// # Endpoint
///
/// `GET /info/{code}`
///
/// Available for expired links; only a truly absent code yields 404.
pub async fn info_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<InfoResponse>, AppError> {
    let info = state.link_service.get_info(&code).await?;

    Ok(Json(info.into()))
}
