#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::NaiveDate;
use serde_json::json;
use star_birthdays::application::services::{CatalogService, StarService};
use star_birthdays::domain::alphabet::Alphabet;
use star_birthdays::domain::clock::FixedClock;
use star_birthdays::domain::entities::{
    Category, Country, NewCategory, NewCountry, NewStar, Star,
};
use star_birthdays::domain::repositories::{
    CategoryRepository, CountryRepository, StarFilter, StarOrder, StarRepository,
};
use star_birthdays::error::AppError;
use star_birthdays::state::AppState;
use star_birthdays::web::routes::routes;
use std::sync::{Arc, Mutex};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// "Today" for every handler test.
pub fn today() -> NaiveDate {
    date(2024, 5, 10)
}

pub fn star(id: i64, name: &str, slug: &str, birth_date: NaiveDate) -> Star {
    Star {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
        birth_date,
        bio: None,
        country_id: None,
        category_ids: Vec::new(),
        is_published: true,
    }
}

/// Countries: Россия (1), США (2).
pub fn seed_countries() -> Vec<Country> {
    vec![
        Country {
            id: 1,
            name: "Россия".to_string(),
            slug: "russia".to_string(),
        },
        Country {
            id: 2,
            name: "США".to_string(),
            slug: "usa".to_string(),
        },
    ]
}

/// Categories: Кино (1), Музыка (2).
pub fn seed_categories() -> Vec<Category> {
    vec![
        Category {
            id: 1,
            title: "Кино".to_string(),
            slug: "kino".to_string(),
        },
        Category {
            id: 2,
            title: "Музыка".to_string(),
            slug: "music".to_string(),
        },
    ]
}

/// Stars around [`today`]: one birthday on each of the three highlighted
/// days, two others, and one hidden star born today.
pub fn seed_stars() -> Vec<Star> {
    vec![
        Star {
            country_id: Some(1),
            category_ids: vec![1],
            bio: Some("Балерина и актриса.".to_string()),
            ..star(1, "Анна Павлова", "anna-pavlova", date(1990, 5, 10))
        },
        Star {
            country_id: Some(1),
            category_ids: vec![2],
            ..star(2, "Борис Гребенщиков", "boris", date(1953, 5, 11))
        },
        Star {
            country_id: Some(1),
            category_ids: vec![1, 2],
            ..star(3, "Вера Брежнева", "vera", date(1982, 5, 12))
        },
        Star {
            country_id: Some(2),
            category_ids: vec![1],
            ..star(4, "Джонни Депп", "johnny-depp", date(1963, 6, 9))
        },
        Star {
            country_id: Some(1),
            category_ids: vec![2],
            ..star(5, "Алла Пугачева", "alla", date(1949, 4, 15))
        },
        Star {
            is_published: false,
            ..star(6, "Скрытая Звезда", "hidden", date(1980, 5, 10))
        },
    ]
}

/// In-memory star storage with the same visibility rules as PostgreSQL.
#[derive(Default)]
pub struct InMemoryStarRepository {
    stars: Mutex<Vec<Star>>,
}

impl InMemoryStarRepository {
    pub fn new(stars: Vec<Star>) -> Self {
        Self {
            stars: Mutex::new(stars),
        }
    }

    pub fn all(&self) -> Vec<Star> {
        self.stars.lock().unwrap().clone()
    }
}

#[async_trait]
impl StarRepository for InMemoryStarRepository {
    async fn list_published(&self, filter: StarFilter) -> Result<Vec<Star>, AppError> {
        let mut stars: Vec<Star> = self
            .stars
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.is_published)
            .filter(|s| filter.country_id.is_none_or(|id| s.country_id == Some(id)))
            .filter(|s| filter.category_id.is_none_or(|id| s.in_category(id)))
            .cloned()
            .collect();

        match filter.order {
            StarOrder::Id => stars.sort_by_key(|s| s.id),
            StarOrder::Name => stars.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id))),
        }

        Ok(stars)
    }

    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Star>, AppError> {
        Ok(self
            .stars
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.slug == slug && s.is_published)
            .cloned())
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, AppError> {
        Ok(self.stars.lock().unwrap().iter().any(|s| s.slug == slug))
    }

    async fn create(&self, new_star: NewStar) -> Result<Star, AppError> {
        let mut stars = self.stars.lock().unwrap();

        if stars.iter().any(|s| s.slug == new_star.slug) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "slug": new_star.slug }),
            ));
        }

        let star = Star {
            id: stars.iter().map(|s| s.id).max().unwrap_or(0) + 1,
            name: new_star.name,
            slug: new_star.slug,
            birth_date: new_star.birth_date,
            bio: new_star.bio,
            country_id: new_star.country_id,
            category_ids: new_star.category_ids,
            is_published: new_star.is_published,
        };
        stars.push(star.clone());

        Ok(star)
    }

    async fn set_published(&self, slug: &str, published: bool) -> Result<(), AppError> {
        let mut stars = self.stars.lock().unwrap();
        match stars.iter_mut().find(|s| s.slug == slug) {
            Some(star) => {
                star.is_published = published;
                Ok(())
            }
            None => Err(AppError::not_found("Star not found", json!({ "slug": slug }))),
        }
    }
}

#[derive(Default)]
pub struct InMemoryCountryRepository {
    countries: Mutex<Vec<Country>>,
}

impl InMemoryCountryRepository {
    pub fn new(countries: Vec<Country>) -> Self {
        Self {
            countries: Mutex::new(countries),
        }
    }
}

#[async_trait]
impl CountryRepository for InMemoryCountryRepository {
    async fn list(&self) -> Result<Vec<Country>, AppError> {
        Ok(self.countries.lock().unwrap().clone())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Country>, AppError> {
        Ok(self
            .countries
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.slug == slug)
            .cloned())
    }

    async fn create(&self, new_country: NewCountry) -> Result<Country, AppError> {
        let mut countries = self.countries.lock().unwrap();
        let country = Country {
            id: countries.len() as i64 + 1,
            name: new_country.name,
            slug: new_country.slug,
        };
        countries.push(country.clone());
        Ok(country)
    }
}

#[derive(Default)]
pub struct InMemoryCategoryRepository {
    categories: Mutex<Vec<Category>>,
}

impl InMemoryCategoryRepository {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories: Mutex::new(categories),
        }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, AppError> {
        Ok(self.categories.lock().unwrap().clone())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, AppError> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.slug == slug)
            .cloned())
    }

    async fn create(&self, new_category: NewCategory) -> Result<Category, AppError> {
        let mut categories = self.categories.lock().unwrap();
        let category = Category {
            id: categories.len() as i64 + 1,
            title: new_category.title,
            slug: new_category.slug,
        };
        categories.push(category.clone());
        Ok(category)
    }
}

/// Country repository whose database is always down.
pub struct UnavailableCountryRepository;

#[async_trait]
impl CountryRepository for UnavailableCountryRepository {
    async fn list(&self) -> Result<Vec<Country>, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn find_by_slug(&self, _slug: &str) -> Result<Option<Country>, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn create(&self, _new_country: NewCountry) -> Result<Country, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }
}

pub fn state_with(
    stars: Arc<InMemoryStarRepository>,
    countries: Arc<dyn CountryRepository>,
    categories: Arc<dyn CategoryRepository>,
) -> AppState {
    AppState {
        star_service: Arc::new(StarService::new(stars)),
        catalog_service: Arc::new(CatalogService::new(countries, categories)),
        alphabet: Arc::new(Alphabet::default()),
        clock: Arc::new(FixedClock(today())),
    }
}

/// State over the seeded catalog. The star repository is returned too so
/// tests can inspect what was written.
pub fn create_test_state() -> (AppState, Arc<InMemoryStarRepository>) {
    let stars = Arc::new(InMemoryStarRepository::new(seed_stars()));
    let state = state_with(
        stars.clone(),
        Arc::new(InMemoryCountryRepository::new(seed_countries())),
        Arc::new(InMemoryCategoryRepository::new(seed_categories())),
    );
    (state, stars)
}

pub fn make_server(state: AppState) -> TestServer {
    TestServer::new(routes().with_state(state)).unwrap()
}
