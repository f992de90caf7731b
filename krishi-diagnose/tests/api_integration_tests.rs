//! Integration tests for the krishi-diagnose HTTP API
//!
//! Tests the complete API surface including:
//! - Health check
//! - Workflow lifecycle and diagnosis stage
//! - Soil intake paths
//! - Location lookups
//! - Content fallback and session language
//! - Server-rendered page

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use krishi_common::config::AnalysisConfig;
use krishi_common::context::{JsonFileStore, MemoryStore, ProfileStore, UserContext};
use krishi_common::events::EventBus;
use krishi_common::Language;
use krishi_diagnose::backend::SimulatedBackend;
use krishi_diagnose::location::LocationHierarchy;
use krishi_diagnose::workflow::WorkflowRegistry;
use krishi_diagnose::{build_router, AppState};

/// Smallest byte strings that content sniffing recognizes
const PNG_BYTES: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00];
const PDF_BYTES: &[u8] = b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n";

/// Test helper to create a test server
async fn setup_test_server() -> (Router, AppState) {
    setup_test_server_with_store(Box::new(MemoryStore::default())).await
}

async fn setup_test_server_with_store(store: Box<dyn ProfileStore>) -> (Router, AppState) {
    let event_bus = EventBus::new(512);
    let registry = WorkflowRegistry::new(
        Arc::new(LocationHierarchy::builtin()),
        Arc::new(SimulatedBackend::new(Duration::from_millis(100))),
        AnalysisConfig::default(),
        event_bus.clone(),
    );
    let context = UserContext::hydrate(store, Language::En).await;
    let state = AppState::new(registry, context, event_bus);
    (build_router(state.clone()), state)
}

/// Helper function to make HTTP requests to the test server
async fn make_request(
    app: &Router,
    method: Method,
    path: &str,
    body: Option<Value>,
) -> (StatusCode, Option<Value>) {
    let request = Request::builder().method(method).uri(path);
    let request = match body {
        Some(json_body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json_body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };
    send(app, request).await
}

async fn upload(app: &Router, path: &str, bytes: &[u8], content_type: &str) -> (StatusCode, Option<Value>) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(bytes.to_vec()))
        .unwrap();
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Option<Value>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json_body = if bytes.is_empty() {
        None
    } else {
        Some(serde_json::from_slice(&bytes).unwrap())
    };
    (status, json_body)
}

async fn get_text(app: &Router, path: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn create_workflow(app: &Router) -> String {
    let (status, body) = make_request(app, Method::POST, "/workflows", None).await;
    assert_eq!(status, StatusCode::CREATED);
    body.unwrap()["workflow_id"].as_str().unwrap().to_string()
}

async fn pick_location(app: &Router, id: &str, state: &str, district: &str, city: &str) {
    for (level, value) in [("state", state), ("district", district), ("city", city)] {
        let (status, _) = make_request(
            app,
            Method::POST,
            &format!("/workflows/{}/soil/location", id),
            Some(json!({ "level": level, "value": value })),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "setting {} to {}", level, value);
    }
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _) = setup_test_server().await;
    create_workflow(&app).await;

    let (status, body) = make_request(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    let body = body.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "krishi-diagnose");
    assert_eq!(body["active_workflows"], 1);
}

// ============================================================================
// Workflow lifecycle
// ============================================================================

#[tokio::test]
async fn test_create_get_delete_workflow() {
    let (app, state) = setup_test_server().await;
    let id = create_workflow(&app).await;

    let (status, body) = make_request(&app, Method::GET, &format!("/workflows/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    let body = body.unwrap();
    assert_eq!(body["stage"], "upload");
    assert_eq!(body["soil_path"], "unset");
    assert_eq!(body["soil_loaded"], false);
    assert_eq!(body["view"]["soil"]["mode"], "path_choice");

    let (status, body) = make_request(&app, Method::DELETE, &format!("/workflows/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_none());
    assert_eq!(state.registry.count().await, 0);

    let (status, body) = make_request(&app, Method::GET, &format!("/workflows/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.unwrap()["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_unknown_workflow_returns_404() {
    let (app, _) = setup_test_server().await;
    let path = format!("/workflows/{}/soil/reset", Uuid::new_v4());
    let (status, _) = make_request(&app, Method::POST, &path, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get_text(&app, &format!("/workflows/{}/events", Uuid::new_v4())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Diagnosis stage
// ============================================================================

#[tokio::test]
async fn test_empty_image_is_noop() {
    let (app, _) = setup_test_server().await;
    let id = create_workflow(&app).await;

    let (status, body) = upload(&app, &format!("/workflows/{}/image", id), &[], "image/png").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.unwrap()["stage"], "upload");
}

#[tokio::test]
async fn test_non_image_rejected() {
    let (app, _) = setup_test_server().await;
    let id = create_workflow(&app).await;

    let (status, body) = upload(&app, &format!("/workflows/{}/image", id), PDF_BYTES, "application/pdf").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.unwrap()["error"]["code"], "BAD_REQUEST");
}

#[tokio::test(start_paused = true)]
async fn test_image_runs_to_results_and_resets() {
    let (app, _) = setup_test_server().await;
    let id = create_workflow(&app).await;
    let image_path = format!("/workflows/{}/image", id);

    let (status, body) = upload(&app, &image_path, PNG_BYTES, "image/png").await;
    assert_eq!(status, StatusCode::OK);
    let body = body.unwrap();
    assert_eq!(body["stage"], "analyzing");
    assert_eq!(body["progress"], 0.0);
    assert!(body["view"]["image"]
        .as_str()
        .unwrap()
        .starts_with("data:image/png;base64,"));

    // A second image during analysis is refused
    let (status, body) = upload(&app, &image_path, PNG_BYTES, "image/png").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body.unwrap()["error"]["code"], "CONFLICT");

    // Reset is only legal from results
    let reset_path = format!("/workflows/{}/diagnosis/reset", id);
    let (status, _) = make_request(&app, Method::POST, &reset_path, None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    tokio::time::sleep(Duration::from_secs(60)).await;

    let (_, body) = make_request(&app, Method::GET, &format!("/workflows/{}", id), None).await;
    let body = body.unwrap();
    assert_eq!(body["stage"], "results");
    assert_eq!(body["progress"], 100.0);
    assert_eq!(body["view"]["diagnosis"]["confidence"], 87);
    assert_eq!(body["view"]["diagnosis"]["severity"], "medium");

    let (status, body) = make_request(&app, Method::POST, &reset_path, None).await;
    assert_eq!(status, StatusCode::OK);
    let body = body.unwrap();
    assert_eq!(body["stage"], "upload");
    assert_eq!(body["progress"], 0.0);
}

// ============================================================================
// Soil intake
// ============================================================================

#[tokio::test]
async fn test_card_path_upload() {
    let (app, _) = setup_test_server().await;
    let id = create_workflow(&app).await;

    let (status, body) = make_request(
        &app,
        Method::POST,
        &format!("/workflows/{}/soil/path", id),
        Some(json!({ "has_card": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.unwrap()["soil_path"], "has_card");

    let (status, body) = upload(&app, &format!("/workflows/{}/soil/card", id), PDF_BYTES, "application/pdf").await;
    assert_eq!(status, StatusCode::OK);
    let body = body.unwrap();
    assert_eq!(body["soil_loaded"], true);
    let soil = &body["view"]["soil"];
    assert_eq!(soil["mode"], "summary");
    assert_eq!(soil["source"], "card");
    assert!(soil["location_label"].is_null());
    assert!(soil["card"].as_str().unwrap().starts_with("data:application/pdf;base64,"));
    assert_eq!(soil["readings"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_card_upload_on_lookup_path_conflicts() {
    let (app, _) = setup_test_server().await;
    let id = create_workflow(&app).await;
    make_request(
        &app,
        Method::POST,
        &format!("/workflows/{}/soil/path", id),
        Some(json!({ "has_card": false })),
    )
    .await;

    let (status, _) = upload(&app, &format!("/workflows/{}/soil/card", id), PDF_BYTES, "application/pdf").await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_reference_lookup_flow() {
    let (app, _) = setup_test_server().await;
    let id = create_workflow(&app).await;
    make_request(
        &app,
        Method::POST,
        &format!("/workflows/{}/soil/path", id),
        Some(json!({ "has_card": false })),
    )
    .await;

    // Incomplete location is a validation error
    let reference = format!("/workflows/{}/soil/reference", id);
    let (status, body) = make_request(&app, Method::POST, &reference, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.unwrap()["error"]["message"].as_str().unwrap().contains("state"));

    pick_location(&app, &id, "PB", "Ludhiana", "Khanna").await;
    let (status, body) = make_request(&app, Method::POST, &reference, None).await;
    assert_eq!(status, StatusCode::OK);
    let soil = &body.unwrap()["view"]["soil"];
    assert_eq!(soil["source"], "reference");
    assert_eq!(soil["location_label"], "Khanna, Ludhiana, Punjab");
    assert_eq!(soil["readings"][0]["status"], "optimal");
}

#[tokio::test]
async fn test_invalid_district_rejected() {
    let (app, _) = setup_test_server().await;
    let id = create_workflow(&app).await;
    let location = format!("/workflows/{}/soil/location", id);
    make_request(
        &app,
        Method::POST,
        &format!("/workflows/{}/soil/path", id),
        Some(json!({ "has_card": false })),
    )
    .await;
    make_request(&app, Method::POST, &location, Some(json!({ "level": "state", "value": "PB" }))).await;

    let (status, _) = make_request(
        &app,
        Method::POST,
        &location,
        Some(json!({ "level": "district", "value": "Pune" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = make_request(&app, Method::GET, &format!("/workflows/{}", id), None).await;
    let soil = &body.unwrap()["view"]["soil"];
    assert_eq!(soil["state"], "PB");
    assert!(soil["district"].is_null());
    assert_eq!(soil["district_enabled"], true);
    assert_eq!(soil["city_enabled"], false);
}

#[tokio::test]
async fn test_manual_entry_flow() {
    let (app, _) = setup_test_server().await;
    let id = create_workflow(&app).await;
    make_request(
        &app,
        Method::POST,
        &format!("/workflows/{}/soil/path", id),
        Some(json!({ "has_card": false })),
    )
    .await;

    // Form stays closed until the location is complete
    let open = format!("/workflows/{}/soil/manual/open", id);
    let (status, _) = make_request(&app, Method::POST, &open, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    pick_location(&app, &id, "MH", "Pune", "Baramati").await;
    let (status, body) = make_request(&app, Method::POST, &open, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.unwrap()["view"]["soil"]["manual"].is_null());

    let field = format!("/workflows/{}/soil/manual/field", id);
    let (status, _) = make_request(
        &app,
        Method::POST,
        &field,
        Some(json!({ "parameter": "ph", "value": "6.9" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = make_request(
        &app,
        Method::POST,
        &field,
        Some(json!({ "parameter": "zinc", "value": "plenty" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = make_request(
        &app,
        Method::POST,
        &field,
        Some(json!({ "parameter": "calcium", "value": "4" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = make_request(
        &app,
        Method::POST,
        &format!("/workflows/{}/soil/manual/submit", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let body = body.unwrap();
    assert_eq!(body["soil_loaded"], true);
    let soil = &body["view"]["soil"];
    assert_eq!(soil["source"], "manual");
    assert_eq!(soil["readings"][0]["value"], "6.9");
    assert!(soil["readings"][6]["value"].is_null());

    // Loaded data must be reset before picking another path
    let (status, _) = make_request(
        &app,
        Method::POST,
        &format!("/workflows/{}/soil/path", id),
        Some(json!({ "has_card": true })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = make_request(&app, Method::POST, &format!("/workflows/{}/soil/reset", id), None).await;
    assert_eq!(status, StatusCode::OK);
    let body = body.unwrap();
    assert_eq!(body["soil_path"], "unset");
    assert_eq!(body["soil_loaded"], false);
}

#[tokio::test]
async fn test_submit_manual_without_numbers() {
    let (app, _) = setup_test_server().await;
    let id = create_workflow(&app).await;
    make_request(
        &app,
        Method::POST,
        &format!("/workflows/{}/soil/path", id),
        Some(json!({ "has_card": false })),
    )
    .await;
    pick_location(&app, &id, "UP", "Lucknow", "Sitapur").await;

    let (status, body) = make_request(
        &app,
        Method::POST,
        &format!("/workflows/{}/soil/manual/submit", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.unwrap()["soil_loaded"], true);
}

// ============================================================================
// Locations
// ============================================================================

#[tokio::test]
async fn test_location_lookups() {
    let (app, _) = setup_test_server().await;

    let (status, body) = make_request(&app, Method::GET, "/locations/states", None).await;
    assert_eq!(status, StatusCode::OK);
    let states = body.unwrap();
    assert_eq!(states[0]["code"], "MH");
    assert_eq!(states[0]["name"], "Maharashtra");
    assert_eq!(states.as_array().unwrap().len(), 4);

    let (_, body) = make_request(&app, Method::GET, "/locations/MH/districts", None).await;
    assert_eq!(
        body.unwrap(),
        json!(["Mumbai", "Pune", "Nashik", "Aurangabad", "Solapur", "Nagpur"])
    );

    let (_, body) = make_request(&app, Method::GET, "/locations/MH/Pune/cities", None).await;
    assert_eq!(
        body.unwrap(),
        json!(["Pune City", "Pimpri-Chinchwad", "Baramati", "Maval"])
    );

    let (status, _) = make_request(&app, Method::GET, "/locations/XX/districts", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = make_request(&app, Method::GET, "/locations/PB/Pune/cities", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Content and session
// ============================================================================

#[tokio::test]
async fn test_content_fallback() {
    let (app, _) = setup_test_server().await;

    let (status, body) = make_request(&app, Method::GET, "/content?lang=fr", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.unwrap()["language"], "en");

    let (_, body) = make_request(&app, Method::GET, "/content?lang=ta", None).await;
    assert_eq!(body.unwrap()["language"], "en");

    let (_, body) = make_request(&app, Method::GET, "/content?lang=mr", None).await;
    assert_eq!(body.unwrap()["language"], "mr");
}

#[tokio::test]
async fn test_session_language_drives_content() {
    let (app, _) = setup_test_server().await;

    let (status, body) = make_request(
        &app,
        Method::POST,
        "/session/language",
        Some(json!({ "language": "hi" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.unwrap()["language"], "hi");

    let (_, body) = make_request(&app, Method::GET, "/content", None).await;
    assert_eq!(body.unwrap()["language"], "hi");

    let (status, _) = make_request(
        &app,
        Method::POST,
        "/session/language",
        Some(json!({ "language": "fr" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_session_language_written_to_root_folder() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::in_root_folder(dir.path());
    let (app, _) = setup_test_server_with_store(Box::new(store.clone())).await;

    let (status, _) = make_request(
        &app,
        Method::POST,
        "/session/language",
        Some(json!({ "language": "pa" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let restored = UserContext::hydrate(Box::new(store), Language::En).await;
    assert_eq!(restored.language(), Language::Pa);
}

#[tokio::test]
async fn test_login_update_logout() {
    let (app, _) = setup_test_server().await;

    let (status, body) = make_request(
        &app,
        Method::POST,
        "/session/login",
        Some(json!({
            "mobile_number": "9876543210",
            "first_name": "Asha",
            "last_name": "Patil",
            "state": "MH",
            "district": "Pune"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let body = body.unwrap();
    assert_eq!(body["authenticated"], true);
    assert_eq!(body["display_name"], "Asha Patil");
    assert!(!body["user"]["id"].as_str().unwrap().is_empty());

    let (_, body) = make_request(&app, Method::POST, "/session", Some(json!({ "village": "Malegaon" }))).await;
    let body = body.unwrap();
    assert_eq!(body["user"]["village"], "Malegaon");
    assert_eq!(body["user"]["first_name"], "Asha");

    let (_, body) = make_request(&app, Method::POST, "/session/logout", None).await;
    let body = body.unwrap();
    assert_eq!(body["authenticated"], false);
    assert!(body["user"].is_null());
}

// ============================================================================
// UI
// ============================================================================

#[tokio::test]
async fn test_root_redirects_to_new_workflow_page() {
    let (app, state) = setup_test_server().await;
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert!(response.status().is_redirection());
    let location = response.headers()[header::LOCATION].to_str().unwrap().to_string();
    assert!(location.starts_with("/workflows/"));
    assert!(location.ends_with("/page"));
    assert_eq!(state.registry.count().await, 1);

    let (status, html) = get_text(&app, &location).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains(r#"data-stage="upload""#));
}

#[tokio::test]
async fn test_page_language_override() {
    let (app, _) = setup_test_server().await;
    let id = create_workflow(&app).await;

    let (status, html) = get_text(&app, &format!("/workflows/{}/page?lang=pa", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"<html lang="pa">"#));

    let (_, html) = get_text(&app, &format!("/workflows/{}/page?lang=kn", id)).await;
    assert!(html.contains(r#"<html lang="en">"#));
}

#[tokio::test]
async fn test_static_assets() {
    let (app, _) = setup_test_server().await;
    for (path, content_type) in [
        ("/static/krishi-ui.css", "text/css"),
        ("/static/diagnose.js", "application/javascript"),
    ] {
        let request = Request::builder().uri(path).body(Body::empty()).unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], content_type);
    }
}
