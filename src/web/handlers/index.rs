//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use chrono::NaiveDate;

use crate::application::services::Menu;
use crate::domain::entities::Star;
use crate::error::AppError;
use crate::state::AppState;

/// Template for the home page.
///
/// Renders `templates/index.html`: three birthday sections followed by the
/// full list of published stars.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: &'static str,
    pub menu: Menu,
    pub today_date: NaiveDate,
    pub tomorrow_date: NaiveDate,
    pub day_after_tomorrow_date: NaiveDate,
    pub today_stars: Vec<Star>,
    pub tomorrow_stars: Vec<Star>,
    pub day_after_tomorrow_stars: Vec<Star>,
    pub stars: Vec<Star>,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
///
/// The current date comes from [`AppState::clock`].
pub async fn index_handler(State(state): State<AppState>) -> Result<IndexTemplate, AppError> {
    let today = state.clock.today();
    let page = state.star_service.home(today).await?;
    let menu = state.catalog_service.menu().await?;

    Ok(IndexTemplate {
        title: "Дни рождения звезд",
        menu,
        today_date: page.window.today,
        tomorrow_date: page.window.tomorrow,
        day_after_tomorrow_date: page.window.day_after_tomorrow,
        today_stars: page.birthdays.today,
        tomorrow_stars: page.birthdays.tomorrow,
        day_after_tomorrow_stars: page.birthdays.day_after_tomorrow,
        stars: page.stars,
    })
}
