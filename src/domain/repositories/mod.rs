//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::persistence`; mock
//! implementations are generated with `mockall` for unit tests.
//!
//! - [`StarRepository`] - Published stars, creation and publication status
//! - [`CountryRepository`] - Countries for the menu and country pages
//! - [`CategoryRepository`] - Categories for the menu and industry pages

pub mod category_repository;
pub mod country_repository;
pub mod star_repository;

pub use category_repository::CategoryRepository;
pub use country_repository::CountryRepository;
pub use star_repository::{StarFilter, StarOrder, StarRepository};

#[cfg(test)]
pub use category_repository::MockCategoryRepository;
#[cfg(test)]
pub use country_repository::MockCountryRepository;
#[cfg(test)]
pub use star_repository::MockStarRepository;
