//! Handler for link deletion.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::error::AppError;
use crate::state::AppState;

/// Deletes a short link and, by cascade, all of its clicks.
///
/// # Endpoint
///
/// `DELETE /delete/{code}`
///
/// Responds 204 No Content on success, 404 if the code does not exist.
pub async fn delete_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete(&code).await?;

    Ok(StatusCode::NO_CONTENT)
}
