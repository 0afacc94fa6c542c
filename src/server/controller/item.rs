use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{cleaner::CleanNamesRequestDto, listing::ItemSearchQueryDto},
    server::{error::Error, model::app::AppState, service::catalog::CatalogService},
};

/// Get one catalog entry with its card or accessory details
pub async fn get_item_info(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db);

    let info = catalog_service.get_item_info(id).await?;

    Ok((StatusCode::OK, Json(info)))
}

/// Substring search over card, candidate, and accessory names
pub async fn search_item_info(
    State(state): State<AppState>,
    Query(query): Query<ItemSearchQueryDto>,
) -> Result<impl IntoResponse, Error> {
    let catalog_service = CatalogService::new(&state.db);

    let name_query = query.name.unwrap_or_default();
    let results = catalog_service.search_item_info(&name_query).await?;

    Ok((StatusCode::OK, Json(results)))
}

/// Delegate raw item names to the external name-cleaning service
pub async fn clean_item_names(
    State(state): State<AppState>,
    Json(dto): Json<CleanNamesRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let results = state.cleaner.clean_item_names(&dto.names).await?;

    Ok((StatusCode::OK, Json(results)))
}
