use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("OPENAI_API_KEY is not configured, name cleaning is unavailable")]
    MissingApiKey,
    #[error("Name-cleaning request failed: {0}")]
    Http(String),
    #[error("Name-cleaning response could not be parsed: {0}")]
    InvalidResponse(String),
}

impl IntoResponse for CleanerError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingApiKey => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorDto {
                    error: "Name cleaning is not available".to_string(),
                }),
            )
                .into_response(),
            Self::Http(_) | Self::InvalidResponse(_) => InternalServerError(self).into_response(),
        }
    }
}
