//! PostgreSQL implementation of the country repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Country, NewCountry};
use crate::domain::repositories::CountryRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct CountryRow {
    id: i64,
    name: String,
    slug: String,
}

impl From<CountryRow> for Country {
    fn from(r: CountryRow) -> Self {
        Country {
            id: r.id,
            name: r.name,
            slug: r.slug,
        }
    }
}

/// PostgreSQL repository for countries.
pub struct PgCountryRepository {
    pool: Arc<PgPool>,
}

impl PgCountryRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CountryRepository for PgCountryRepository {
    async fn list(&self) -> Result<Vec<Country>, AppError> {
        let rows = sqlx::query_as::<_, CountryRow>(
            "SELECT id, name, slug FROM countries ORDER BY name, id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Country::from).collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Country>, AppError> {
        let row =
            sqlx::query_as::<_, CountryRow>("SELECT id, name, slug FROM countries WHERE slug = $1")
                .bind(slug)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(Country::from))
    }

    async fn create(&self, new_country: NewCountry) -> Result<Country, AppError> {
        let row = sqlx::query_as::<_, CountryRow>(
            r#"
            INSERT INTO countries (name, slug)
            VALUES ($1, $2)
            RETURNING id, name, slug
            "#,
        )
        .bind(new_country.name)
        .bind(new_country.slug)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }
}
