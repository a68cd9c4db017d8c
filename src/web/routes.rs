//! Site route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    about_handler, add_star_form_handler, add_star_handler, country_handler, health_handler,
    index_handler, industry_handler, sitemap_handler, sitemap_letter_handler,
    star_detail_handler,
};
use axum::{Router, routing::get};

/// All page routes. No authentication: every page is public.
///
/// # Endpoints
///
/// - `GET  /`                 - Birthdays today, tomorrow and the day after, then all stars
/// - `GET  /person/{slug}`    - Star detail page
/// - `GET  /about`            - About page
/// - `GET  /country/{slug}`   - Stars from a country
/// - `GET  /industry/{slug}`  - Stars from a category
/// - `GET  /add`              - Add-a-star form
/// - `POST /add`              - Form submission
/// - `GET  /sitemap`          - Alphabetical index of all stars
/// - `GET  /sitemap/{letter}` - Stars starting with a letter
/// - `GET  /health`           - JSON health check
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/person/{slug}", get(star_detail_handler))
        .route("/about", get(about_handler))
        .route("/country/{slug}", get(country_handler))
        .route("/industry/{slug}", get(industry_handler))
        .route("/add", get(add_star_form_handler).post(add_star_handler))
        .route("/sitemap", get(sitemap_handler))
        .route("/sitemap/{letter}", get(sitemap_letter_handler))
        .route("/health", get(health_handler))
}
