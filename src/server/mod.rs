//! Server application core modules.
//!
//! Everything behind the HTTP surface of the marketplace: routing,
//! configuration, the repository layer over the catalog store, the listing
//! and catalog services that own the listing-creation transaction, and the
//! error taxonomy mapped onto HTTP responses.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
