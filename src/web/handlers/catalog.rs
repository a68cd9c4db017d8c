//! Country and category listing handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};

use crate::application::services::Menu;
use crate::domain::entities::Star;
use crate::error::AppError;
use crate::state::AppState;

/// Stars from one country.
#[derive(Template, WebTemplate)]
#[template(path = "country.html")]
pub struct CountryTemplate {
    pub title_template: &'static str,
    pub country_name: String,
    pub stars: Vec<Star>,
    pub menu: Menu,
}

/// Stars from one category.
#[derive(Template, WebTemplate)]
#[template(path = "industry.html")]
pub struct IndustryTemplate {
    pub title_template: &'static str,
    pub category_name: String,
    pub stars: Vec<Star>,
    pub menu: Menu,
}

/// Renders published stars from a country.
///
/// # Endpoint
///
/// `GET /country/{slug}`
///
/// # Errors
///
/// Returns 404 if the country does not exist.
pub async fn country_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<CountryTemplate, AppError> {
    let country = state.catalog_service.country(&slug).await?;
    let stars = state.star_service.by_country(country.id).await?;

    Ok(CountryTemplate {
        title_template: "Знаменитости из страны",
        country_name: country.name,
        stars,
        menu: state.catalog_service.menu().await?,
    })
}

/// Renders published stars from a category.
///
/// # Endpoint
///
/// `GET /industry/{slug}`
///
/// # Errors
///
/// Returns 404 if the category does not exist.
pub async fn industry_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<IndustryTemplate, AppError> {
    let category = state.catalog_service.category(&slug).await?;
    let stars = state.star_service.by_category(category.id).await?;

    Ok(IndustryTemplate {
        title_template: "Знаменитости из отрасли",
        category_name: category.title,
        stars,
        menu: state.catalog_service.menu().await?,
    })
}
