//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - Site pages - see [`crate::web::routes::routes`]
//! - `/static/*` - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling, so `/person/anna/`
//!   reaches the same page as `/person/anna`

use crate::state::AppState;
use crate::web;
use crate::web::middleware::tracing;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/static`
pub fn app_router(state: AppState, static_dir: &str) -> NormalizePath<Router> {
    let router = web::routes::routes()
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::{CatalogService, StarService};
    use crate::domain::alphabet::Alphabet;
    use crate::domain::clock::FixedClock;
    use crate::domain::repositories::{
        MockCategoryRepository, MockCountryRepository, MockStarRepository,
    };
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::NaiveDate;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state() -> AppState {
        let mut countries = MockCountryRepository::new();
        countries.expect_list().returning(|| Ok(vec![]));
        let mut categories = MockCategoryRepository::new();
        categories.expect_list().returning(|| Ok(vec![]));

        AppState {
            star_service: Arc::new(StarService::new(Arc::new(MockStarRepository::new()))),
            catalog_service: Arc::new(CatalogService::new(
                Arc::new(countries),
                Arc::new(categories),
            )),
            alphabet: Arc::new(Alphabet::default()),
            clock: Arc::new(FixedClock(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap())),
        }
    }

    #[tokio::test]
    async fn test_trailing_slash_is_trimmed() {
        let app = app_router(state(), "static");

        let response = app
            .oneshot(Request::get("/about/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_static_files_are_served() {
        let app = app_router(state(), concat!(env!("CARGO_MANIFEST_DIR"), "/static"));

        let response = app
            .oneshot(Request::get("/static/style.css").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let app = app_router(state(), "static");

        let response = app
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_pages_served_through_plain_make_service() {
        use tower::Service;

        let app = app_router(state(), "static");
        let mut make_service = axum::ServiceExt::<Request<Body>>::into_make_service(app);
        let service = make_service.call(()).await.unwrap();

        let response = service
            .oneshot(Request::get("/about").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
