//! Application layer services.
//!
//! Services coordinate repository calls with the pure birthday and sitemap
//! logic from [`crate::domain`] and hand ready-to-render data to the web
//! handlers.
//!
//! - [`services::star_service::StarService`] - Listings, birthdays, sitemap, star creation
//! - [`services::catalog_service::CatalogService`] - Countries, categories and the menu

pub mod services;
