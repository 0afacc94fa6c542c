use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum CatalogError {
    /// The submitted item carries neither a resolvable identity nor enough
    /// data to create one.
    #[error("Item cannot be resolved to a catalog identity: {0}")]
    InvalidItemShape(String),
    /// The re-read after a unique-constraint conflict found no row. Should
    /// not occur; the winning insert must be visible to the retry.
    #[error("Identity conflict could not be resolved for natural key {0}")]
    IdentityConflict(String),
    #[error("Item info ID {0} not found")]
    ItemInfoNotFound(i32),
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidItemShape(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::ItemInfoNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::IdentityConflict(_) => InternalServerError(self).into_response(),
        }
    }
}
