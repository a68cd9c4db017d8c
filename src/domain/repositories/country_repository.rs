//! Repository trait for countries.

use crate::domain::entities::{Country, NewCountry};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for countries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CountryRepository: Send + Sync {
    /// Lists all countries ordered by name.
    async fn list(&self) -> Result<Vec<Country>, AppError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Country>, AppError>;

    /// Creates a country.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug is taken.
    async fn create(&self, new_country: NewCountry) -> Result<Country, AppError>;
}
