//! Services Layer
//!
//! This module contains the catalog logic behind the HTTP handlers.

pub mod catalog_service;

pub use catalog_service::CatalogService;
