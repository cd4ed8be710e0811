//! Integration tests for the gateway REST API
//!
//! Tests the wire envelope of every route, including the error bodies
//! produced before and after a repository is bound.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt as TowerServiceExt;

use crate::common::{create_test_gateway, TestRepo};
use repogate::http::{router, AppState};

/// Create a test application with an unbound gateway
fn create_test_app() -> (Router, AppState) {
    let state = AppState::new(create_test_gateway());
    (router(state.clone()), state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body = axum::body::to_bytes(response.into_body(), 1_000_000)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn post_raw(app: &Router, uri: &str, body: &'static str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::from(body))
            .unwrap(),
    )
    .await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn init(app: &Router, repo: &TestRepo) {
    let (status, _) = post(app, "/init", json!({"Data": {"path": repo.path_str()}})).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_heartbeat_bound_or_not() {
    let (app, _) = create_test_app();

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"Result": "Heartbeat"}));

    let repo = TestRepo::small();
    init(&app, &repo).await;

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"Result": "Heartbeat"}));
}

#[tokio::test]
async fn test_ready_reflects_readiness_flag() {
    let (app, state) = create_test_app();

    let (status, body) = get(&app, "/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({"error": "server not ready"}));

    state.readiness.set(true);
    let (status, body) = get(&app, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"Result": "Ready"}));
}

#[tokio::test]
async fn test_init_echoes_path() {
    let (app, _) = create_test_app();
    let repo = TestRepo::small();

    let (status, body) = post(&app, "/init", json!({"Data": {"path": repo.path_str()}})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"Result": {"path": repo.path_str()}, "Status": 200}));
}

#[tokio::test]
async fn test_init_requires_path() {
    let (app, _) = create_test_app();
    let expected = json!({"error": "path is required"});

    for body in [
        json!({}),
        json!({"Data": null}),
        json!({"Data": {}}),
        json!({"Data": {"path": ""}}),
    ] {
        let (status, response) = post(&app, "/init", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response, expected);
    }
}

#[tokio::test]
async fn test_init_without_json_body() {
    let (app, _) = create_test_app();

    for body in ["", "not json"] {
        let (status, response) = post_raw(&app, "/init", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response, json!({"error": "path is required"}));
    }
}

#[tokio::test]
async fn test_init_nonexistent_path() {
    let (app, _) = create_test_app();

    let (status, body) = post(
        &app,
        "/init",
        json!({"Data": {"path": "/definitely/not/a/repository"}}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("failed to open repository at /definitely/not/a/repository"));
}

#[tokio::test]
async fn test_file_tree_before_init() {
    let (app, _) = create_test_app();

    let (status, body) = post_raw(&app, "/file_tree", "").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "repository not initialized"}));
}

#[tokio::test]
async fn test_file_tree_after_init() {
    let (app, _) = create_test_app();
    let repo = TestRepo::other();
    init(&app, &repo).await;

    let (status, body) = post_raw(&app, "/file_tree", "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Status"], 200);
    let paths: Vec<_> = body["Result"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, vec!["lib", "lib/app.js", "package.json"]);
}

#[tokio::test]
async fn test_rebind_switches_tree() {
    let (app, _) = create_test_app();
    let a = TestRepo::small();
    let b = TestRepo::other();

    init(&app, &a).await;
    init(&app, &b).await;

    let (_, body) = post_raw(&app, "/file_tree", "").await;
    let tree = body["Result"].as_array().unwrap();
    assert!(tree.iter().all(|e| !e["path"].as_str().unwrap().starts_with("src")));
}

#[tokio::test]
async fn test_find_symbols() {
    let (app, _) = create_test_app();
    let repo = TestRepo::small();
    init(&app, &repo).await;

    let (status, body) = post(
        &app,
        "/find_symbols",
        json!({"Data": {"symbol": "helper", "symbol_type": "function"}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["Result"][0],
        json!({
            "file": "scripts/tool.py",
            "line": 1,
            "column": 4,
            "name": "helper",
            "usage": "definition",
            "context": "def helper(x):"
        })
    );
}

#[tokio::test]
async fn test_find_symbols_no_results_is_empty_list() {
    let (app, _) = create_test_app();
    let repo = TestRepo::small();
    init(&app, &repo).await;

    let (status, body) = post(
        &app,
        "/find_symbols",
        json!({"Data": {"symbol": "NoSuchSymbol", "symbol_type": "any"}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"Result": [], "Status": 200}));
}

#[tokio::test]
async fn test_find_symbols_validation_before_init() {
    let (app, _) = create_test_app();

    let (status, body) = post(&app, "/find_symbols", json!({"Data": {"symbol": "main"}})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "symbol and symbol_type are required"}));
}

#[tokio::test]
async fn test_get_file_content() {
    let (app, _) = create_test_app();
    let repo = TestRepo::other();
    init(&app, &repo).await;

    let (status, body) = post(
        &app,
        "/get_file_content",
        json!({"Data": {"path": "package.json"}}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"Result": "{\"name\": \"other\"}\n", "Status": 200}));
}

#[tokio::test]
async fn test_get_file_content_missing_file() {
    let (app, _) = create_test_app();
    let repo = TestRepo::small();
    init(&app, &repo).await;

    let (status, body) = post(
        &app,
        "/get_file_content",
        json!({"Data": {"path": "missing.txt"}}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "file not found: missing.txt"}));
}

#[tokio::test]
async fn test_get_file_content_before_init() {
    let (app, _) = create_test_app();

    let (status, body) = post(
        &app,
        "/get_file_content",
        json!({"Data": {"path": "README.md"}}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "repository not initialized"}));
}
