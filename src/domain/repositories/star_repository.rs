//! Repository trait for stars.

use crate::domain::entities::{NewStar, Star};
use crate::error::AppError;
use async_trait::async_trait;

/// Sort order for star listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StarOrder {
    /// Insertion order.
    #[default]
    Id,
    /// Alphabetical by name, as the sitemap expects.
    Name,
}

/// Filters applied by [`StarRepository::list_published`].
///
/// `None` means "no restriction" for every field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StarFilter {
    pub country_id: Option<i64>,
    pub category_id: Option<i64>,
    pub order: StarOrder,
}

impl StarFilter {
    pub fn by_country(country_id: i64) -> Self {
        Self {
            country_id: Some(country_id),
            ..Self::default()
        }
    }

    pub fn by_category(category_id: i64) -> Self {
        Self {
            category_id: Some(category_id),
            ..Self::default()
        }
    }

    pub fn ordered_by_name() -> Self {
        Self {
            order: StarOrder::Name,
            ..Self::default()
        }
    }
}

/// Repository interface for stars.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStarRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StarRepository: Send + Sync {
    /// Lists published stars matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_published(&self, filter: StarFilter) -> Result<Vec<Star>, AppError>;

    /// Finds a published star by slug. Unpublished stars are invisible.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Star>, AppError>;

    /// Checks whether any star, published or not, already uses `slug`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn slug_exists(&self, slug: &str) -> Result<bool, AppError>;

    /// Creates a star together with its category links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug is taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_star: NewStar) -> Result<Star, AppError>;

    /// Publishes or hides a star.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no star has this slug.
    /// Returns [`AppError::Internal`] on database errors.
    async fn set_published(&self, slug: &str, published: bool) -> Result<(), AppError>;
}
