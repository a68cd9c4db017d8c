//! PostgreSQL repository implementations.
//!
//! Queries are built at runtime with `sqlx::query_as` and mapped through
//! `FromRow` structs, so the crate builds without a live database.
//!
//! - [`PgStarRepository`] - Stars and their category links
//! - [`PgCountryRepository`] - Countries
//! - [`PgCategoryRepository`] - Categories

pub mod pg_category_repository;
pub mod pg_country_repository;
pub mod pg_star_repository;

pub use pg_category_repository::PgCategoryRepository;
pub use pg_country_repository::PgCountryRepository;
pub use pg_star_repository::PgStarRepository;
