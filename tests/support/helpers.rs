// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{InMemoryArticleStore, StepClock};
use articles_api::application::{ports::time::Clock, services::ApplicationServices};
use articles_api::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use articles_api::presentation::http::{routes::build_router, state::HttpState};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use tower::util::ServiceExt as _;

pub fn build_services(store: &InMemoryArticleStore) -> ApplicationServices {
    let write: Arc<dyn ArticleWriteRepository> = Arc::new(store.clone());
    let read: Arc<dyn ArticleReadRepository> = Arc::new(store.clone());
    let clock: Arc<dyn Clock> = Arc::new(StepClock::default());
    ApplicationServices::new(write, read, clock)
}

pub fn build_test_state(store: &InMemoryArticleStore) -> HttpState {
    HttpState {
        services: Arc::new(build_services(store)),
    }
}

pub fn make_test_router_with_store(store: &InMemoryArticleStore) -> axum::Router {
    build_router(build_test_state(store))
}

pub fn make_test_router() -> (axum::Router, InMemoryArticleStore) {
    let store = InMemoryArticleStore::new();
    (make_test_router_with_store(&store), store)
}

/// Send one request and return the transport status with the decoded JSON
/// body.
pub async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    send_raw(app, builder.body(body).unwrap()).await
}

pub async fn send_raw(app: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = serde_json::from_slice(&bytes).expect("expected valid json body");
    (status, json)
}

/// Assert a `{status: <code>, message: <non-empty>}` failure envelope.
pub fn assert_failure(json: &Value, expected_status: u64) {
    assert_eq!(json["status"], expected_status, "unexpected envelope: {json}");
    assert!(json.get("data").is_none(), "failure envelope carries data: {json}");
    let message = json["message"].as_str().unwrap_or("");
    assert!(!message.is_empty(), "expected non-empty message: {json}");
}
