//! Error types for the cardmarket server.
//!
//! Domain-specific error enums (listing, catalog, cleaner, config) implement
//! `IntoResponse` individually and are aggregated into a single [`Error`]
//! type via `thiserror`'s `#[from]`, so handlers and services propagate with
//! `?` and the HTTP mapping happens in one place.

pub mod catalog;
pub mod cleaner;
pub mod config;
pub mod listing;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        catalog::CatalogError, cleaner::CleanerError, config::ConfigError, listing::ListingError,
    },
};

/// Main error type for the cardmarket server.
///
/// Every failure inside the listing-creation transaction aborts the whole
/// transaction; the only error caught and converted into a retry is the
/// resolver's unique-constraint conflict, which never reaches this type.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Listing submission error (validation, missing rows).
    #[error(transparent)]
    ListingError(#[from] ListingError),
    /// Catalog identity resolution error.
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// Name-cleaner delegation error.
    #[error(transparent)]
    CleanerError(#[from] CleanerError),
    /// Database error (query failures, connection issues, constraint
    /// violations not handled by the resolver's retry path).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

#[cfg(test)]
impl From<Error> for cardmarket_test_utils::TestError {
    fn from(err: Error) -> Self {
        match err {
            Error::DbErr(db) => cardmarket_test_utils::TestError::DbErr(db),
            other => cardmarket_test_utils::TestError::DbErr(sea_orm::DbErr::Custom(
                other.to_string(),
            )),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ListingError(err) => err.into_response(),
            Self::CatalogError(err) => err.into_response(),
            Self::CleanerError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the full error message for debugging, but returns a generic error
/// message to the client so store-specific details never leak.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
