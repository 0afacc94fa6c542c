//! HTTP route table.

use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router.
///
/// # Registered Endpoints
/// - `POST /api/listings` - Create a listing (items resolved, images claimed)
/// - `GET  /api/listings` - Listing summaries, newest first
/// - `GET  /api/listings/{id}` - One listing, fully materialized
/// - `GET  /api/listings/{id}/images` - Images of a listing in display order
/// - `GET  /api/images/{id}` - One uploaded image
/// - `GET  /api/items/search` - Substring search over catalog names
/// - `GET  /api/items/{id}` - One catalog entry with details
/// - `POST /api/items/clean-names` - Delegate names to the cleaning service
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/listings",
            post(controller::listing::create_listing).get(controller::listing::get_listings),
        )
        .route("/api/listings/{id}", get(controller::listing::get_listing))
        .route(
            "/api/listings/{id}/images",
            get(controller::image::get_listing_images),
        )
        .route("/api/images/{id}", get(controller::image::get_image))
        .route("/api/items/search", get(controller::item::search_item_info))
        .route(
            "/api/items/clean-names",
            post(controller::item::clean_item_names),
        )
        .route("/api/items/{id}", get(controller::item::get_item_info))
}
