//! Service layer.
//!
//! The listing service owns the listing-creation transaction; the catalog
//! service and resolver own item identity; the cleaner wraps the external
//! name-cleaning endpoint.

pub mod catalog;
pub mod cleaner;
pub mod listing;
