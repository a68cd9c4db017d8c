//! Countries and categories: the site menu and its facet pages.

use std::sync::Arc;

use crate::domain::entities::{Category, Country, NewCategory, NewCountry, Star};
use crate::domain::repositories::{CategoryRepository, CountryRepository};
use crate::error::AppError;
use crate::utils::slug::validate_slug;
use serde_json::json;

/// Everything the navigation menu shows on every page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    pub countries: Vec<Country>,
    pub categories: Vec<Category>,
}

impl Menu {
    pub fn country(&self, id: i64) -> Option<&Country> {
        self.countries.iter().find(|c| c.id == id)
    }

    pub fn category(&self, id: i64) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Categories of `star` in menu order. Unknown ids are ignored.
    pub fn categories_of(&self, star: &Star) -> Vec<Category> {
        self.categories
            .iter()
            .filter(|c| star.in_category(c.id))
            .cloned()
            .collect()
    }
}

/// Service for the country/category catalog.
pub struct CatalogService {
    countries: Arc<dyn CountryRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(
        countries: Arc<dyn CountryRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            countries,
            categories,
        }
    }

    /// Loads the menu: all countries and all categories.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn menu(&self) -> Result<Menu, AppError> {
        Ok(Menu {
            countries: self.countries.list().await?,
            categories: self.categories.list().await?,
        })
    }

    /// Retrieves a country by slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the country does not exist.
    pub async fn country(&self, slug: &str) -> Result<Country, AppError> {
        self.countries
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Страна не найдена", json!({ "slug": slug })))
    }

    /// Retrieves a category by slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category does not exist.
    pub async fn category(&self, slug: &str) -> Result<Category, AppError> {
        self.categories
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Отрасль не найдена", json!({ "slug": slug })))
    }

    /// Creates a country.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name or slug is invalid.
    /// Returns [`AppError::Conflict`] if the slug already exists.
    pub async fn create_country(&self, name: String, slug: String) -> Result<Country, AppError> {
        let name = validate_name(&name)?;
        validate_slug(&slug)?;

        if self.countries.find_by_slug(&slug).await?.is_some() {
            return Err(AppError::conflict(
                "Country already exists",
                json!({ "slug": slug }),
            ));
        }

        self.countries.create(NewCountry { name, slug }).await
    }

    /// Creates a category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the title or slug is invalid.
    /// Returns [`AppError::Conflict`] if the slug already exists.
    pub async fn create_category(
        &self,
        title: String,
        slug: String,
    ) -> Result<Category, AppError> {
        let title = validate_name(&title)?;
        validate_slug(&slug)?;

        if self.categories.find_by_slug(&slug).await?.is_some() {
            return Err(AppError::conflict(
                "Category already exists",
                json!({ "slug": slug }),
            ));
        }

        self.categories.create(NewCategory { title, slug }).await
    }
}

fn validate_name(name: &str) -> Result<String, AppError> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.chars().count() > 255 {
        return Err(AppError::bad_request(
            "Invalid name length",
            json!({ "min": 1, "max": 255 }),
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockCategoryRepository, MockCountryRepository};
    use chrono::NaiveDate;

    fn country(id: i64, name: &str, slug: &str) -> Country {
        Country {
            id,
            name: name.to_string(),
            slug: slug.to_string(),
        }
    }

    fn category(id: i64, title: &str, slug: &str) -> Category {
        Category {
            id,
            title: title.to_string(),
            slug: slug.to_string(),
        }
    }

    fn service(countries: MockCountryRepository, categories: MockCategoryRepository) -> CatalogService {
        CatalogService::new(Arc::new(countries), Arc::new(categories))
    }

    #[tokio::test]
    async fn test_menu_loads_both_lists() {
        let mut countries = MockCountryRepository::new();
        countries
            .expect_list()
            .times(1)
            .returning(|| Ok(vec![country(1, "Россия", "russia")]));

        let mut categories = MockCategoryRepository::new();
        categories.expect_list().times(1).returning(|| {
            Ok(vec![
                category(1, "Кино", "cinema"),
                category(2, "Музыка", "music"),
            ])
        });

        let menu = service(countries, categories).menu().await.unwrap();

        assert_eq!(menu.countries.len(), 1);
        assert_eq!(menu.categories.len(), 2);
    }

    #[tokio::test]
    async fn test_country_not_found() {
        let mut countries = MockCountryRepository::new();
        countries
            .expect_find_by_slug()
            .withf(|slug| slug == "atlantis")
            .times(1)
            .returning(|_| Ok(None));

        let result = service(countries, MockCategoryRepository::new())
            .country("atlantis")
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_category_found() {
        let mut categories = MockCategoryRepository::new();
        categories
            .expect_find_by_slug()
            .times(1)
            .returning(|_| Ok(Some(category(3, "Спорт", "sport"))));

        let found = service(MockCountryRepository::new(), categories)
            .category("sport")
            .await
            .unwrap();

        assert_eq!(found.title, "Спорт");
    }

    #[tokio::test]
    async fn test_create_country_success() {
        let mut countries = MockCountryRepository::new();
        countries
            .expect_find_by_slug()
            .times(1)
            .returning(|_| Ok(None));
        countries
            .expect_create()
            .withf(|new| new.name == "Франция" && new.slug == "france")
            .times(1)
            .returning(|new| Ok(country(7, &new.name, &new.slug)));

        let created = service(countries, MockCategoryRepository::new())
            .create_country("  Франция ".to_string(), "france".to_string())
            .await
            .unwrap();

        assert_eq!(created.id, 7);
        assert_eq!(created.name, "Франция");
    }

    #[tokio::test]
    async fn test_create_country_duplicate() {
        let mut countries = MockCountryRepository::new();
        countries
            .expect_find_by_slug()
            .times(1)
            .returning(|_| Ok(Some(country(1, "Франция", "france"))));

        let result = service(countries, MockCategoryRepository::new())
            .create_country("Франция".to_string(), "france".to_string())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_create_category_invalid_slug() {
        let result = service(MockCountryRepository::new(), MockCategoryRepository::new())
            .create_category("Театр".to_string(), "Театр".to_string())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_category_empty_title() {
        let result = service(MockCountryRepository::new(), MockCategoryRepository::new())
            .create_category("   ".to_string(), "theatre".to_string())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[test]
    fn test_menu_categories_of_star() {
        let menu = Menu {
            countries: vec![country(1, "Россия", "russia")],
            categories: vec![
                category(1, "Кино", "cinema"),
                category(2, "Музыка", "music"),
                category(3, "Спорт", "sport"),
            ],
        };
        let star = Star {
            id: 1,
            name: "Анна".to_string(),
            slug: "anna".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 10).unwrap(),
            bio: None,
            country_id: Some(1),
            category_ids: vec![3, 1, 99],
            is_published: true,
        };

        let titles: Vec<String> = menu
            .categories_of(&star)
            .into_iter()
            .map(|c| c.title)
            .collect();

        assert_eq!(titles, vec!["Кино", "Спорт"]);
        assert_eq!(menu.country(1).map(|c| c.name.as_str()), Some("Россия"));
        assert!(menu.country(2).is_none());
    }
}
