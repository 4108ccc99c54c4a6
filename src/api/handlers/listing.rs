//! Handler for the full listing endpoint.

use axum::{Json, extract::State};

use crate::api::dto::listing::ListingItem;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all URL records with their click histories, newest record first.
///
/// # Endpoint
///
/// `GET /all`
///
/// Served through the in-process listing cache; creates and deletes
/// invalidate it.
pub async fn listing_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ListingItem>>, AppError> {
    let listing = state.link_service.list_all().await?;

    Ok(Json(listing.into_iter().map(ListingItem::from).collect()))
}
