//! Star listings, birthdays, the sitemap and star creation.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::json;

use crate::application::services::catalog_service::Menu;
use crate::domain::alphabet::{active_letters, filter_by_letter};
use crate::domain::birthday::{BirthdayBuckets, BirthdayWindow, classify_in};
use crate::domain::entities::{NewStar, Star};
use crate::domain::repositories::{StarFilter, StarRepository};
use crate::error::AppError;
use crate::utils::slug::validate_slug;

/// Data for the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomePage {
    pub window: BirthdayWindow,
    pub stars: Vec<Star>,
    pub birthdays: BirthdayBuckets,
}

/// Data for the sitemap pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapPage {
    /// Stars ordered by name; only those for `current_letter` when one is set.
    pub stars: Vec<Star>,
    /// First letters over all published stars, whatever letter is selected.
    pub active_letters: BTreeSet<String>,
    pub current_letter: Option<String>,
}

/// Service for reading and creating stars.
pub struct StarService {
    repository: Arc<dyn StarRepository>,
}

impl StarService {
    /// Creates a new star service.
    pub fn new(repository: Arc<dyn StarRepository>) -> Self {
        Self { repository }
    }

    /// Builds the home page for `today`: every published star plus those
    /// with a birthday today, tomorrow or the day after.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if `today` is at the end of the
    /// representable calendar.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn home(&self, today: NaiveDate) -> Result<HomePage, AppError> {
        let window = BirthdayWindow::starting(today)?;
        let stars = self.repository.list_published(StarFilter::default()).await?;
        let birthdays = classify_in(&window, &stars);

        tracing::debug!(
            total = stars.len(),
            today = birthdays.today.len(),
            tomorrow = birthdays.tomorrow.len(),
            day_after_tomorrow = birthdays.day_after_tomorrow.len(),
            "classified birthdays"
        );

        Ok(HomePage {
            window,
            stars,
            birthdays,
        })
    }

    /// Retrieves a published star by slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the star does not exist or is not
    /// published.
    pub async fn get_star(&self, slug: &str) -> Result<Star, AppError> {
        self.repository
            .find_published_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Знаменитость не найдена", json!({ "slug": slug })))
    }

    /// Lists published stars from a country.
    pub async fn by_country(&self, country_id: i64) -> Result<Vec<Star>, AppError> {
        self.repository
            .list_published(StarFilter::by_country(country_id))
            .await
    }

    /// Lists published stars from a category.
    pub async fn by_category(&self, category_id: i64) -> Result<Vec<Star>, AppError> {
        self.repository
            .list_published(StarFilter::by_category(category_id))
            .await
    }

    /// Adds a star submitted through the site form. Such stars are always
    /// published.
    ///
    /// # Validation
    ///
    /// - Slug must be well formed and unused
    /// - Country and categories must exist in `menu`
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if validation fails.
    /// Returns [`AppError::Conflict`] if the slug is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn add_star(&self, mut new_star: NewStar, menu: &Menu) -> Result<Star, AppError> {
        validate_slug(&new_star.slug)?;

        if let Some(country_id) = new_star.country_id
            && menu.country(country_id).is_none()
        {
            return Err(AppError::bad_request(
                "Выбранной страны нет в списке",
                json!({ "country_id": country_id }),
            ));
        }

        if let Some(unknown) = new_star
            .category_ids
            .iter()
            .find(|id| menu.category(**id).is_none())
        {
            return Err(AppError::bad_request(
                "Выбранной отрасли нет в списке",
                json!({ "category_id": unknown }),
            ));
        }

        if self.repository.slug_exists(&new_star.slug).await? {
            return Err(AppError::conflict(
                "Slug already taken",
                json!({ "slug": new_star.slug }),
            ));
        }

        new_star.category_ids.sort_unstable();
        new_star.category_ids.dedup();
        new_star.is_published = true;

        let star = self.repository.create(new_star).await?;
        tracing::info!(id = star.id, slug = %star.slug, "star added");

        Ok(star)
    }

    /// Builds the full sitemap: all published stars ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn sitemap(&self) -> Result<SitemapPage, AppError> {
        let stars = self
            .repository
            .list_published(StarFilter::ordered_by_name())
            .await?;

        Ok(SitemapPage {
            active_letters: active_letters(&stars),
            stars,
            current_letter: None,
        })
    }

    /// Builds the sitemap for one letter.
    ///
    /// The letter is upper-cased. Active letters are always computed over
    /// every published star, not just the selected letter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `letter` is not exactly one
    /// character.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn sitemap_for_letter(&self, letter: &str) -> Result<SitemapPage, AppError> {
        let mut chars = letter.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(AppError::bad_request(
                    "Укажите одну букву",
                    json!({ "letter": letter }),
                ));
            }
        };

        let all = self
            .repository
            .list_published(StarFilter::ordered_by_name())
            .await?;

        Ok(SitemapPage {
            stars: filter_by_letter(&all, letter),
            active_letters: active_letters(&all),
            current_letter: Some(letter.to_uppercase().collect()),
        })
    }

    /// Publishes or hides a star.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no star has this slug.
    pub async fn set_published(&self, slug: &str, published: bool) -> Result<(), AppError> {
        self.repository.set_published(slug, published).await?;
        tracing::info!(slug, published, "star publication changed");
        Ok(())
    }
}
