//! "About" page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::application::services::Menu;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub menu: Menu,
}

/// Renders the about page.
///
/// # Endpoint
///
/// `GET /about`
pub async fn about_handler(State(state): State<AppState>) -> Result<AboutTemplate, AppError> {
    Ok(AboutTemplate {
        title: "О сайте",
        description: "Сайт создан в учебных целях. Данные сгенерированы нейросетью.",
        menu: state.catalog_service.menu().await?,
    })
}
