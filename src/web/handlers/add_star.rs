//! "Add a star" form handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{RawForm, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use crate::application::services::Menu;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::forms::{FormErrors, StarForm};

/// Template for the add form, empty or re-rendered with errors.
#[derive(Template, WebTemplate)]
#[template(path = "add-star.html")]
pub struct AddStarTemplate {
    pub title: &'static str,
    pub form: StarForm,
    pub errors: FormErrors,
    pub menu: Menu,
}

impl AddStarTemplate {
    fn new(form: StarForm, errors: FormErrors, menu: Menu) -> Self {
        Self {
            title: "Добавление знаменитости",
            form,
            errors,
            menu,
        }
    }
}

/// Renders the empty form.
///
/// # Endpoint
///
/// `GET /add`
pub async fn add_star_form_handler(
    State(state): State<AppState>,
) -> Result<AddStarTemplate, AppError> {
    let menu = state.catalog_service.menu().await?;
    Ok(AddStarTemplate::new(
        StarForm::default(),
        FormErrors::default(),
        menu,
    ))
}

/// Handles a form submission.
///
/// # Endpoint
///
/// `POST /add`
///
/// # Responses
///
/// - **303 See Other** to `/person/{slug}?created=1` when the star was added
/// - **422 Unprocessable Entity** with the form and its errors otherwise
pub async fn add_star_handler(
    State(state): State<AppState>,
    RawForm(body): RawForm,
) -> Result<Response, AppError> {
    let form = StarForm::from_urlencoded(&body);
    let menu = state.catalog_service.menu().await?;

    let new_star = match form.into_new_star(state.clock.today()) {
        Ok(new_star) => new_star,
        Err(errors) => return Ok(invalid(form, errors, menu)),
    };

    match state.star_service.add_star(new_star, &menu).await {
        Ok(star) => Ok(Redirect::to(&format!("/person/{}?created=1", star.slug)).into_response()),
        Err(AppError::Conflict { .. }) => {
            let mut errors = FormErrors::default();
            errors.insert("slug", "Этот адрес уже занят");
            Ok(invalid(form, errors, menu))
        }
        Err(AppError::Validation { message, .. }) => {
            let mut errors = FormErrors::default();
            errors.insert(FormErrors::FORM, message);
            Ok(invalid(form, errors, menu))
        }
        Err(e) => Err(e),
    }
}

fn invalid(form: StarForm, errors: FormErrors, menu: Menu) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        AddStarTemplate::new(form, errors, menu),
    )
        .into_response()
}
