//! Router tests against a mocked embedding provider and an on-disk store.

#![allow(clippy::unwrap_used, reason = "test code")]

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash as _, Hasher as _};
use std::sync::Arc;

use activity_log_core::{EmbeddingConfig, StoreConfig};
use activity_log_embeddings::{Credential, OpenAiEmbedder};
use activity_log_service::ActivityService;
use activity_log_storage::ActivityStore;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt as _;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{AppState, create_router};

const DIM: usize = 128;

/// Deterministic bag-of-words vector for the provider mock.
fn hash_embedding(text: &str) -> Vec<f32> {
    let mut v = vec![0.0_f32; DIM];
    for token in text.split(|c: char| !c.is_alphanumeric()).filter(|t| !t.is_empty()) {
        let mut hasher = DefaultHasher::new();
        token.to_lowercase().hash(&mut hasher);
        let slot = usize::try_from(hasher.finish() % DIM as u64).unwrap();
        v[slot] += 1.0;
    }
    v
}

async fn mount_embedding_provider(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v1/embeddings"))
        .respond_with(|req: &wiremock::Request| {
            let body: Value = serde_json::from_slice(&req.body).unwrap();
            let input = body["input"].as_str().unwrap_or_default();
            ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{ "index": 0, "embedding": hash_embedding(input) }]
            }))
        })
        .mount(server)
        .await;
}

fn test_app(server: &MockServer, key: Option<&str>) -> (Router, TempDir) {
    let dir = TempDir::new().unwrap();
    let store = ActivityStore::open(&StoreConfig::in_dir(dir.path())).unwrap();
    let credential = Credential::from_optional(key.map(str::to_owned));
    let config = EmbeddingConfig::default().with_base_url(server.uri());
    let embedder = OpenAiEmbedder::new(&config, credential.clone()).unwrap();
    let service = ActivityService::new(Arc::new(embedder), Arc::new(store), credential);
    let state = Arc::new(AppState { activity_service: Arc::new(service) });
    (create_router(state), dir)
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}

fn post(uri: &str) -> Request<Body> {
    Request::builder().method(Method::POST).uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn last_authorization(requests: &[wiremock::Request]) -> String {
    requests
        .last()
        .and_then(|r| r.headers.get("authorization"))
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned()
}

#[tokio::test]
async fn upload_then_search_returns_uploaded_metadata_first() {
    let server = MockServer::start().await;
    mount_embedding_provider(&server).await;
    let (app, _dir) = test_app(&server, Some("sk-test"));

    let (status, body) = send(
        &app,
        post("/upload?timestamp=2024-01-01T10:00:00Z&app_name=editor&description=wrote%20report"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "message": "Activity logged successfully" }));

    let (status, _) = send(
        &app,
        post("/upload?timestamp=2024-01-01T11:00:00Z&app_name=browser&description=read%20news"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, post("/search?query=wrote%20report")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["metadatas"][0][0],
        serde_json::json!({
            "timestamp": "2024-01-01T10:00:00Z",
            "app": "editor",
            "description": "wrote report"
        })
    );
    assert_eq!(body["matches"][0][0], "2024-01-01T10:00:00Z - editor - wrote report");
    assert_eq!(body["ids"][0][0], "2024-01-01T10:00:00Z");
    assert_eq!(body["matches"][0].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn upload_accepts_json_body() {
    let server = MockServer::start().await;
    mount_embedding_provider(&server).await;
    let (app, _dir) = test_app(&server, Some("sk-test"));

    let (status, _) = send(
        &app,
        post_json(
            "/upload",
            &serde_json::json!({
                "timestamp": "t1",
                "app_name": "terminal",
                "description": "cargo build"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) =
        send(&app, post_json("/search", &serde_json::json!({ "query": "cargo build" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["metadatas"][0][0]["app"], "terminal");
}

#[tokio::test]
async fn search_empty_collection_returns_no_matches() {
    let server = MockServer::start().await;
    mount_embedding_provider(&server).await;
    let (app, _dir) = test_app(&server, Some("sk-test"));

    let (status, body) = send(&app, post("/search?query=anything")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matches"], serde_json::json!([[]]));
}

#[tokio::test]
async fn set_api_key_applies_to_next_embedding() {
    let server = MockServer::start().await;
    mount_embedding_provider(&server).await;
    let (app, _dir) = test_app(&server, Some("sk-initial"));

    send(&app, post("/search?query=first")).await;
    assert_eq!(last_authorization(&server.received_requests().await.unwrap()), "Bearer sk-initial");

    let (status, body) =
        send(&app, post_json("/set-api-key", &serde_json::json!({ "key": "sk-rotated" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "API key updated successfully");

    send(&app, post("/search?query=second")).await;
    assert_eq!(last_authorization(&server.received_requests().await.unwrap()), "Bearer sk-rotated");
}

#[tokio::test]
async fn missing_key_is_unauthorized() {
    let server = MockServer::start().await;
    mount_embedding_provider(&server).await;
    let (app, _dir) = test_app(&server, None);

    let (status, body) = send(&app, post("/search?query=anything")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].as_str().unwrap().contains("API key"));
}

#[tokio::test]
async fn key_with_newline_is_unauthorized() {
    let server = MockServer::start().await;
    mount_embedding_provider(&server).await;
    let (app, _dir) = test_app(&server, Some("sk-test"));

    let (status, _) =
        send(&app, post_json("/set-api-key", &serde_json::json!({ "key": "sk-bad\nkey" }))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, post("/search?query=x")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].as_str().unwrap().contains("invalid API key"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_params_is_bad_request() {
    let server = MockServer::start().await;
    mount_embedding_provider(&server).await;
    let (app, _dir) = test_app(&server, Some("sk-test"));

    let (status, body) = send(&app, post("/upload?timestamp=t1")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = send(&app, post("/search")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn provider_outage_fails_upload_and_stores_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/embeddings"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;
    let (app, _dir) = test_app(&server, Some("sk-test"));

    let (status, body) =
        send(&app, post("/upload?timestamp=t1&app_name=editor&description=lost")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"].as_str().unwrap().contains("upstream down"));

    let req = Request::builder().uri("/api/stats").body(Body::empty()).unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn rate_limit_is_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/embeddings"))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .mount(&server)
        .await;
    let (app, _dir) = test_app(&server, Some("sk-test"));

    let (status, body) = send(&app, post("/search?query=x")).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert!(body["error"].as_str().unwrap().contains("quota exceeded"));
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let server = MockServer::start().await;
    let (app, _dir) = test_app(&server, Some("sk-test"));

    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/upload")
        .header(header::ORIGIN, "http://localhost:1212")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert!(resp.status().is_success());
    assert_eq!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
}

#[tokio::test]
async fn health_and_version() {
    let server = MockServer::start().await;
    let (app, _dir) = test_app(&server, None);

    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("ok".to_owned()));

    let req = Request::builder().uri("/api/version").body(Body::empty()).unwrap();
    let (_, body) = send(&app, req).await;
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
