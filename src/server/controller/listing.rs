use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::listing::CreateListingDto,
    server::{error::Error, model::app::AppState, service::listing::ListingService},
};

/// Create a listing from a submission of items and pre-uploaded image ids
pub async fn create_listing(
    State(state): State<AppState>,
    Json(dto): Json<CreateListingDto>,
) -> Result<impl IntoResponse, Error> {
    let listing_service = ListingService::new(&state.db);

    let listing = listing_service.create_listing(dto).await?;

    Ok((StatusCode::CREATED, Json(listing)))
}

/// Get listing summaries, newest first
pub async fn get_listings(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let listing_service = ListingService::new(&state.db);

    let listings = listing_service.get_listings().await?;

    Ok((StatusCode::OK, Json(listings)))
}

/// Get one listing with items, catalog details, and images materialized
pub async fn get_listing(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let listing_service = ListingService::new(&state.db);

    let listing = listing_service.get_listing(id).await?;

    Ok((StatusCode::OK, Json(listing)))
}
