#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sections_core::design_pattern::{DesignPatternManager, DesignPatternRepo, DesignPatternService};
use sections_core::store::DocumentStore;
use sections_db::MemoryDocumentStore;
use tower::ServiceExt;

use sections_api::app::build_app;
use sections_api::config::ServerConfig;
use sections_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Build the full application (all middleware layers) around `service`.
pub fn build_test_app(
    service: Arc<dyn DesignPatternService>,
    store: Arc<dyn DocumentStore>,
) -> Router {
    build_test_app_with_config(service, store, test_config())
}

/// Same as [`build_test_app`] with an explicit configuration.
pub fn build_test_app_with_config(
    service: Arc<dyn DesignPatternService>,
    store: Arc<dyn DocumentStore>,
    config: ServerConfig,
) -> Router {
    build_app(AppState {
        design_patterns: service,
        store,
        config: Arc::new(config),
    })
}

/// Build the application wired through the real service and repository,
/// on top of an in-memory store. The store is returned for inspection.
pub fn build_memory_app() -> (Router, MemoryDocumentStore) {
    let store = MemoryDocumentStore::new();
    let repo = DesignPatternRepo::new(&store);
    let service = Arc::new(DesignPatternManager::new(repo));
    let app = build_test_app(service, Arc::new(store.clone()));
    (app, store)
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Send `body` verbatim with a JSON content type.
pub async fn send_raw_json(app: Router, method: Method, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_raw_json(app, Method::POST, uri, &body.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_raw_json(app, Method::PUT, uri, &body.to_string()).await
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
