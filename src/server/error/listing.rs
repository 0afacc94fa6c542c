use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum ListingError {
    #[error("Cannot create a listing without any items")]
    EmptyItemSet,
    #[error("Listing ID {0} not found")]
    ListingNotFound(i32),
    #[error("Listing image ID {0} not found")]
    ImageNotFound(i32),
}

impl IntoResponse for ListingError {
    fn into_response(self) -> Response {
        match self {
            Self::EmptyItemSet => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::ListingNotFound(_) | Self::ImageNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
