//! HTTP request handlers.
//!
//! Thin mappings from the axum extractors onto the service layer; all
//! domain decisions live in the services.

pub mod image;
pub mod item;
pub mod listing;
