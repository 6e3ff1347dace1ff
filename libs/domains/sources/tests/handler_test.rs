//! Handler tests for the sources domain
//!
//! These tests run the HTTP handlers against the in-memory repository and
//! verify request deserialization, the response envelopes, and status codes.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_sources::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_create_source_returns_stored_row_in_envelope() {
    let service = SourceService::new(InMemorySourceRepository::new());
    let app = handlers::router(service);

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "Manual Entry",
                "url": "https://manual",
                "scraper_type": "manual",
                "scraper_config": {},
                "country_filter": ["Netherlands", "Germany", "Belgium", "France"],
                "is_active": true
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["name"], "Manual Entry");
    assert_eq!(body["data"]["url"], "https://manual");
    assert!(body["data"]["id"].is_string());
    assert!(body["data"]["created_at"].is_string());
}

#[tokio::test]
async fn test_create_source_defaults_is_active_true() {
    let service = SourceService::new(InMemorySourceRepository::new());
    let app = handlers::router(service);

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "name": "Autosport Feed" })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"]["is_active"], true);
    assert_eq!(body["data"]["scraper_config"], json!({}));
}

#[tokio::test]
async fn test_list_sources_ordered_by_name() {
    let service = SourceService::new(InMemorySourceRepository::new());

    for name in ["Zandvoort Scraper", "Autosport Feed", "Manual Entry"] {
        let input: CreateSource = serde_json::from_value(json!({ "name": name })).unwrap();
        service.create_source(input).await.unwrap();
    }

    let app = handlers::router(service);

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();

    assert_eq!(names, vec!["Autosport Feed", "Manual Entry", "Zandvoort Scraper"]);
}

#[tokio::test]
async fn test_create_source_rejects_missing_name() {
    let service = SourceService::new(InMemorySourceRepository::new());
    let app = handlers::router(service);

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "Invalid request body");
    assert!(body["details"].as_str().unwrap().contains("name"));
}
