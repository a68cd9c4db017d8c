//! Business logic services for the application layer.

pub mod catalog_service;
pub mod star_service;

pub use catalog_service::{CatalogService, Menu};
pub use star_service::{HomePage, SitemapPage, StarService};
