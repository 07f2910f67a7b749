//! Integration tests for the Patterndex Web API.
//!
//! These tests require the `web` feature to be enabled:
//! ```bash
//! cargo test --features web web_api
//! ```

#![cfg(feature = "web")]

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use patterndex::config::Config;
use patterndex::consent::{ConsentStore, STORAGE_KEY};
use patterndex::loading::IGNORE_HEADER;
use patterndex::web::{create_router, AppState};

/// Creates a test AppState whose consent file lives in a temporary directory.
fn create_test_state() -> (AppState, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let consent =
        ConsentStore::load(temp_dir.path().join("state.toml")).expect("Failed to load consent");
    (AppState::new(Config::default(), consent), temp_dir)
}

/// Helper to make a GET request and get the response body as JSON.
async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

/// Helper to make a PUT request with JSON body.
async fn put_json(app: &axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let (state, _temp_dir) = create_test_state();
    let app = create_router(state);

    let (status, json) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
    // The health request itself is in flight
    assert_eq!(json["pending_requests"], 1);
    assert_eq!(json["cached_sections"], 0);
}

#[tokio::test]
async fn test_ignore_header_skips_loading_indicator() {
    let (state, _temp_dir) = create_test_state();
    let app = create_router(state.clone());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(IGNORE_HEADER, "1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["pending_requests"], 0);
    assert!(!state.loading().is_loading());
}

// ============================================================================
// Section Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_list_sections() {
    let (state, _temp_dir) = create_test_state();
    let app = create_router(state);

    let (status, json) = get_json(&app, "/api/sections").await;

    assert_eq!(status, StatusCode::OK);
    let sections = json["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 8);
    assert_eq!(sections[1]["key"], "classic-patterns");
    assert_eq!(sections[1]["path"], "/classic");
    assert_eq!(sections[7]["catalog"], false);
}

#[tokio::test]
async fn test_list_items_by_segment() {
    let (state, _temp_dir) = create_test_state();
    let app = create_router(state.clone());

    let (status, json) = get_json(&app, "/api/sections/classic").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["available"], true);
    assert_eq!(json["section"]["key"], "classic-patterns");
    assert_eq!(json["categories"], json!(["Creational", "Structural", "Behavioral"]));
    assert_eq!(json["total"], json["items"].as_array().unwrap().len());
    assert_eq!(json["items"][0]["path"], "/classic/singleton");
    assert!(json["items"][0]["stars"].is_string());

    assert_eq!(state.loader().cached_count(), 1);
    assert!(!state.loading().is_loading());
}

#[tokio::test]
async fn test_list_items_filtered() {
    let (state, _temp_dir) = create_test_state();
    let app = create_router(state);

    let (_, json) = get_json(&app, "/api/sections/solid?category=Open%2FClosed").await;
    assert_eq!(json["category"], "Open/Closed");
    assert_eq!(json["total"], 1);
    assert_eq!(json["items"][0]["letter"], "O");

    let (_, json) = get_json(&app, "/api/sections/solid?category=all").await;
    assert_eq!(json["category"], Value::Null);
    assert_eq!(json["total"], 5);

    let (_, json) = get_json(&app, "/api/sections/solid?category=Nope").await;
    assert_eq!(json["total"], 0);
}

#[tokio::test]
async fn test_unknown_section_degrades_to_empty_list() {
    let (state, _temp_dir) = create_test_state();
    let app = create_router(state.clone());

    let (status, json) = get_json(&app, "/api/sections/does-not-exist").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["available"], false);
    assert!(json["items"].as_array().unwrap().is_empty());
    assert!(json.get("section").is_none());
    assert_eq!(state.loader().cached_count(), 0);
}

#[tokio::test]
async fn test_canonical_key_is_not_a_route_segment() {
    let (state, _temp_dir) = create_test_state();
    let app = create_router(state.clone());

    let (status, json) = get_json(&app, "/api/sections/classic-patterns").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["available"], false);
    assert!(json.get("section").is_none());
    assert!(json["items"].as_array().unwrap().is_empty());

    let (status, json) = get_json(&app, "/api/sections/classic-patterns/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["categories"].as_array().unwrap().is_empty());

    let (status, _) = get_json(&app, "/api/sections/classic-patterns/items/singleton").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert_eq!(state.loader().cached_count(), 0);
}

#[tokio::test]
async fn test_list_categories() {
    let (state, _temp_dir) = create_test_state();
    let app = create_router(state);

    let (status, json) = get_json(&app, "/api/sections/solid/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["categories"].as_array().unwrap().len(), 5);

    let (status, json) = get_json(&app, "/api/sections/architecture/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["categories"].as_array().unwrap().is_empty());
}

// ============================================================================
// Detail Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_get_item_success() {
    let (state, _temp_dir) = create_test_state();
    let app = create_router(state);

    let (status, json) = get_json(&app, "/api/sections/classic/items/singleton").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], "singleton");
    assert_eq!(json["section"], "classic-patterns");
    assert_eq!(json["back"], "/classic");
    assert!(json["codeExample"].is_string());
}

#[tokio::test]
async fn test_get_item_not_found() {
    let (state, _temp_dir) = create_test_state();
    let app = create_router(state);

    let (status, json) = get_json(&app, "/api/sections/solid/items/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Not found");

    let (status, _) = get_json(&app, "/api/sections/nope/items/singleton").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Route Resolution Tests
// ============================================================================

#[tokio::test]
async fn test_resolve_route() {
    let (state, _temp_dir) = create_test_state();
    let app = create_router(state);

    let (status, json) = get_json(&app, "/api/route?path=/reactive/immutability").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["route"]["kind"], "detail");
    assert_eq!(json["route"]["section"], "reactive-principles");
    assert_eq!(json["path"], "/reactive/immutability");

    let (_, json) = get_json(&app, "/api/route?path=/").await;
    assert_eq!(json["path"], "/patterns");
    assert_eq!(json["route"]["kind"], "list");

    let (_, json) = get_json(&app, "/api/route?path=/some/deep/unknown/path").await;
    assert_eq!(json["path"], "/patterns");
}

// ============================================================================
// Consent Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_consent_round_trip() {
    let (state, temp_dir) = create_test_state();
    let app = create_router(state);

    let (status, json) = get_json(&app, "/api/consent").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["state"], "pending");
    assert_eq!(json["analytics_enabled"], false);

    let (status, json) = put_json(&app, "/api/consent", json!({ "state": "accepted" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["state"], "accepted");
    assert_eq!(json["analytics_enabled"], true);

    let (_, json) = get_json(&app, "/api/consent").await;
    assert_eq!(json["state"], "accepted");

    let stored = std::fs::read_to_string(temp_dir.path().join("state.toml")).unwrap();
    let table: toml::Table = toml::from_str(&stored).unwrap();
    assert_eq!(
        table.get(STORAGE_KEY).and_then(toml::Value::as_str),
        Some("accepted")
    );
}

#[tokio::test]
async fn test_consent_rejects_unknown_state() {
    let (state, _temp_dir) = create_test_state();
    let app = create_router(state);

    let (status, _) = put_json(&app, "/api/consent", json!({ "state": "maybe" })).await;
    assert!(status.is_client_error());

    let (_, json) = get_json(&app, "/api/consent").await;
    assert_eq!(json["state"], "pending");
}
