//! Common test utilities.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use library_api::{build_app, AppState};
use library_core::db::open_db_in_memory;
use library_core::CatalogService;
use tower::ServiceExt;

/// Create a test app over a fresh in-memory catalog.
pub fn test_app() -> Router {
    let conn = open_db_in_memory().unwrap();
    build_app(AppState::new(CatalogService::from_connection(conn)))
}

/// Response status and raw body bytes.
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

/// Send one request through a clone of `app`.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
    let body = match body {
        Some(text) => Body::from(text.to_owned()),
        None => Body::empty(),
    };
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(body)
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .map(|value| value.to_str().unwrap().to_owned());
    let body = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        content_type,
        body: body.to_vec(),
    }
}
