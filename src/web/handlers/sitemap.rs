//! Alphabetical sitemap handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};

use crate::application::services::Menu;
use crate::domain::alphabet::LetterFacet;
use crate::domain::entities::Star;
use crate::error::AppError;
use crate::state::AppState;

/// All published stars by name, with the letter bar on top.
#[derive(Template, WebTemplate)]
#[template(path = "sitemap.html")]
pub struct SitemapTemplate {
    pub facets: Vec<LetterFacet>,
    pub stars: Vec<Star>,
    pub menu: Menu,
}

/// Published stars for one letter.
#[derive(Template, WebTemplate)]
#[template(path = "sitemap_letter.html")]
pub struct SitemapLetterTemplate {
    pub facets: Vec<LetterFacet>,
    pub current_letter: String,
    pub stars: Vec<Star>,
    pub menu: Menu,
}

/// Renders the full sitemap.
///
/// # Endpoint
///
/// `GET /sitemap`
pub async fn sitemap_handler(State(state): State<AppState>) -> Result<SitemapTemplate, AppError> {
    let page = state.star_service.sitemap().await?;

    Ok(SitemapTemplate {
        facets: state.alphabet.facets(&page.active_letters),
        stars: page.stars,
        menu: state.catalog_service.menu().await?,
    })
}

/// Renders the sitemap for one letter.
///
/// # Endpoint
///
/// `GET /sitemap/{letter}`
///
/// The letter bar keeps showing every letter that has stars, not only the
/// selected one. Letters outside the configured alphabet are still served.
///
/// # Errors
///
/// Returns 400 if `letter` is not a single character.
pub async fn sitemap_letter_handler(
    Path(letter): Path<String>,
    State(state): State<AppState>,
) -> Result<SitemapLetterTemplate, AppError> {
    let page = state.star_service.sitemap_for_letter(&letter).await?;

    Ok(SitemapLetterTemplate {
        facets: state.alphabet.facets(&page.active_letters),
        current_letter: page.current_letter.unwrap_or_default(),
        stars: page.stars,
        menu: state.catalog_service.menu().await?,
    })
}
