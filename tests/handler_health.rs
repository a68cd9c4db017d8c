mod common;

use axum::http::StatusCode;
use std::sync::Arc;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (state, _stars) = common::create_test_state();
    let server = common::make_server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(
        json["checks"]["database"]["message"],
        "Connected, 2 countries, 2 categories"
    );
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_endpoint_database_down() {
    let state = common::state_with(
        Arc::new(common::InMemoryStarRepository::default()),
        Arc::new(common::UnavailableCountryRepository),
        Arc::new(common::InMemoryCategoryRepository::default()),
    );
    let server = common::make_server(state);

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}

#[tokio::test]
async fn test_pages_hide_internal_errors() {
    let state = common::state_with(
        Arc::new(common::InMemoryStarRepository::default()),
        Arc::new(common::UnavailableCountryRepository),
        Arc::new(common::InMemoryCategoryRepository::default()),
    );
    let server = common::make_server(state);

    let response = server.get("/about").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let html = response.text();
    assert!(html.contains("Внутренняя ошибка сервера"));
    assert!(!html.contains("Database error"));
}
