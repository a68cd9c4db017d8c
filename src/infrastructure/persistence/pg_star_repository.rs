//! PostgreSQL implementation of the star repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewStar, Star};
use crate::domain::repositories::{StarFilter, StarOrder, StarRepository};
use crate::error::AppError;

/// Star columns plus the aggregated category ids. Requires `GROUP BY s.id`.
const STAR_SELECT: &str = r#"
    SELECT s.id, s.name, s.slug, s.birth_date, s.bio, s.country_id, s.is_published,
           COALESCE(
               ARRAY_AGG(sc.category_id ORDER BY sc.category_id)
                   FILTER (WHERE sc.category_id IS NOT NULL),
               '{}'::BIGINT[]
           ) AS category_ids
    FROM stars s
    LEFT JOIN star_categories sc ON sc.star_id = s.id
"#;

#[derive(sqlx::FromRow)]
struct StarRow {
    id: i64,
    name: String,
    slug: String,
    birth_date: NaiveDate,
    bio: Option<String>,
    country_id: Option<i64>,
    is_published: bool,
    category_ids: Vec<i64>,
}

impl From<StarRow> for Star {
    fn from(r: StarRow) -> Self {
        Star {
            id: r.id,
            name: r.name,
            slug: r.slug,
            birth_date: r.birth_date,
            bio: r.bio,
            country_id: r.country_id,
            category_ids: r.category_ids,
            is_published: r.is_published,
        }
    }
}

/// PostgreSQL repository for stars.
///
/// Category links live in `star_categories` and are written in the same
/// transaction as the star itself.
pub struct PgStarRepository {
    pool: Arc<PgPool>,
}

impl PgStarRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StarRepository for PgStarRepository {
    async fn list_published(&self, filter: StarFilter) -> Result<Vec<Star>, AppError> {
        let order_by = match filter.order {
            StarOrder::Id => "s.id",
            StarOrder::Name => "s.name, s.id",
        };

        let sql = format!(
            r#"{STAR_SELECT}
            WHERE s.is_published = TRUE
              AND ($1::BIGINT IS NULL OR s.country_id = $1)
              AND ($2::BIGINT IS NULL OR EXISTS (
                    SELECT 1 FROM star_categories f
                    WHERE f.star_id = s.id AND f.category_id = $2
                  ))
            GROUP BY s.id
            ORDER BY {order_by}
            "#
        );

        let rows = sqlx::query_as::<_, StarRow>(&sql)
            .bind(filter.country_id)
            .bind(filter.category_id)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Star::from).collect())
    }

    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Star>, AppError> {
        let sql = format!(
            r#"{STAR_SELECT}
            WHERE s.slug = $1 AND s.is_published = TRUE
            GROUP BY s.id
            "#
        );

        let row = sqlx::query_as::<_, StarRow>(&sql)
            .bind(slug)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Star::from))
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, AppError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM stars WHERE slug = $1)")
                .bind(slug)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn create(&self, new_star: NewStar) -> Result<Star, AppError> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO stars (name, slug, birth_date, bio, country_id, is_published)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&new_star.name)
        .bind(&new_star.slug)
        .bind(new_star.birth_date)
        .bind(&new_star.bio)
        .bind(new_star.country_id)
        .bind(new_star.is_published)
        .fetch_one(&mut *tx)
        .await?;

        if !new_star.category_ids.is_empty() {
            sqlx::query(
                r#"
                INSERT INTO star_categories (star_id, category_id)
                SELECT $1, UNNEST($2::BIGINT[])
                "#,
            )
            .bind(id)
            .bind(&new_star.category_ids)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(Star {
            id,
            name: new_star.name,
            slug: new_star.slug,
            birth_date: new_star.birth_date,
            bio: new_star.bio,
            country_id: new_star.country_id,
            category_ids: new_star.category_ids,
            is_published: new_star.is_published,
        })
    }

    async fn set_published(&self, slug: &str, published: bool) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE stars SET is_published = $2, updated_at = NOW()
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .bind(published)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Star not found",
                json!({ "slug": slug }),
            ));
        }

        Ok(())
    }
}
