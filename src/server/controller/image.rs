use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::listing::ListingImageDto,
    server::{
        data::listing::listing_image::ListingImageRepository,
        error::{listing::ListingError, Error},
        model::app::AppState,
    },
};

fn image_dto(image: entity::listing_image::Model) -> ListingImageDto {
    ListingImageDto {
        id: image.id,
        listing_id: image.listing_id,
        url: image.url,
        order: image.order,
    }
}

/// Get one uploaded image by id
pub async fn get_image(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let image_repo = ListingImageRepository::new(&state.db);

    let image = image_repo
        .get_by_id(id)
        .await?
        .ok_or(ListingError::ImageNotFound(id))?;

    Ok((StatusCode::OK, Json(image_dto(image))))
}

/// Get the images attached to a listing, in display order
pub async fn get_listing_images(
    State(state): State<AppState>,
    Path(listing_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let image_repo = ListingImageRepository::new(&state.db);

    let images = image_repo.find_by_listing_id(listing_id).await?;
    let images: Vec<ListingImageDto> = images.into_iter().map(image_dto).collect();

    Ok((StatusCode::OK, Json(images)))
}
