use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt; // for oneshot

mod support;

#[tokio::test]
async fn openapi_json_documents_article_routes() {
    let (app, _store) = support::make_test_router();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/openapi.json")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = body::to_bytes(resp.into_body(), 4 * 1024 * 1024).await.unwrap();
    let doc: Value = serde_json::from_slice(&bytes).unwrap();

    let paths = doc["paths"].as_object().expect("paths object");
    let collection = &paths["/api/v1/articles"];
    assert!(collection.get("get").is_some());
    assert!(collection.get("post").is_some());
    let item = &paths["/api/v1/articles/{id}"];
    for method in ["get", "put", "delete"] {
        assert!(item.get(method).is_some(), "missing {method} operation");
    }
}

#[tokio::test]
async fn health_returns_ok() {
    let (app, _store) = support::make_test_router();

    let (status, json) = support::send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");

    let direct = articles_api::presentation::http::routes::health().await;
    assert_eq!(direct.0.status, "ok");
}
