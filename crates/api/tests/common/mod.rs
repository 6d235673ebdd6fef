#![allow(dead_code)]

use std::path::Path;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use script_intake_api::config::ServerConfig;
use script_intake_api::router::build_app_router;
use script_intake_api::state::AppState;

/// Build a test `ServerConfig` writing records into `scripts_dir`.
pub fn test_config(scripts_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        scripts_dir: scripts_dir.to_path_buf(),
        request_timeout_secs: 30,
        max_body_bytes: 1024,
    }
}

/// Build the full application router (same middleware stack as `main.rs`).
pub fn build_test_app(scripts_dir: &Path) -> Router {
    build_app_router(AppState::new(test_config(scripts_dir)))
}

/// Send a request to `/create` with the given optional headers and raw body.
pub async fn create(
    app: Router,
    method: Method,
    server: Option<&str>,
    content_type: Option<&str>,
    body: &str,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri("/create");
    if let Some(server) = server {
        builder = builder.header("X-Server", server);
    }
    if let Some(content_type) = content_type {
        builder = builder.header("X-Header-Content-Type", content_type);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    app.oneshot(request).await.unwrap()
}

/// `POST /create` with both headers set.
pub async fn post_create(app: Router, body: &str) -> Response<Body> {
    create(
        app,
        Method::POST,
        Some("srv1"),
        Some("application/json"),
        body,
    )
    .await
}

/// Send a `GET` request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as UTF-8 text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Extract the identifier from a `Script created with UUID: <id>\n` body.
pub fn created_id(body: &str) -> String {
    body.strip_prefix("Script created with UUID: ")
        .and_then(|rest| rest.strip_suffix('\n'))
        .unwrap_or_else(|| panic!("unexpected success body: {body:?}"))
        .to_string()
}

/// Number of entries in `dir`.
pub fn file_count(dir: &Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}
