//! Star detail page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use crate::application::services::Menu;
use crate::domain::entities::{Category, Star};
use crate::error::AppError;
use crate::state::AppState;

/// Query string of the detail page. `created` is set by the redirect that
/// follows a successful form submission.
#[derive(Debug, Default, Deserialize)]
pub struct DetailQuery {
    pub created: Option<String>,
}

/// Template for a single star.
#[derive(Template, WebTemplate)]
#[template(path = "star-detail.html")]
pub struct StarDetailTemplate {
    pub menu: Menu,
    pub star: Star,
    pub bio: String,
    pub country_name: String,
    pub categories: Vec<Category>,
    pub created: bool,
}

/// Renders a published star.
///
/// # Endpoint
///
/// `GET /person/{slug}`
///
/// # Errors
///
/// Returns 404 if the star does not exist or is not published.
pub async fn star_detail_handler(
    Path(slug): Path<String>,
    Query(query): Query<DetailQuery>,
    State(state): State<AppState>,
) -> Result<StarDetailTemplate, AppError> {
    let star = state.star_service.get_star(&slug).await?;
    let menu = state.catalog_service.menu().await?;

    let country_name = star
        .country_id
        .and_then(|id| menu.country(id))
        .map(|c| c.name.clone())
        .unwrap_or_default();
    let categories = menu.categories_of(&star);

    Ok(StarDetailTemplate {
        bio: star.bio.clone().unwrap_or_default(),
        country_name,
        categories,
        created: query.created.is_some(),
        star,
        menu,
    })
}
