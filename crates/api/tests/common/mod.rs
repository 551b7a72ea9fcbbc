//! Common test utilities for integration tests.
//!
//! Each test builds its own router over a fresh in-memory store, so tests
//! are independent and need no external services.

// Helpers are shared across test binaries; not every binary uses all of them.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use fake::{faker::name::en::Name, Fake};
use gift_registry_api::{
    app::create_app,
    config::{Config, LoggingConfig, SecurityConfig, ServerConfig},
};
use persistence::RegistryStore;
use serde_json::{json, Value};
use tower::ServiceExt;

pub const ADMIN_KEY: &str = "test-admin-key";

/// Test configuration with the admin gate open.
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0, // Use random port
            request_timeout_secs: 30,
            max_body_size: 65536,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
        security: SecurityConfig {
            cors_origins: vec![],
            admin_key: String::new(),
        },
    }
}

/// Test configuration requiring [`ADMIN_KEY`] on admin routes.
pub fn test_config_with_admin_key() -> Config {
    let mut config = test_config();
    config.security.admin_key = ADMIN_KEY.to_string();
    config
}

/// Create a test application router over the given store.
pub fn create_test_app(config: Config, store: RegistryStore) -> Router {
    create_app(config, store)
}

/// Router with an open admin gate and an empty store.
pub fn test_app() -> Router {
    create_test_app(test_config(), RegistryStore::new())
}

/// Build a JSON request without credentials.
pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// Build a JSON request carrying the admin key.
pub fn json_request_with_admin_key(
    method: Method,
    uri: &str,
    body: Value,
    key: &str,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header("X-Admin-Key", key)
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// Build a request with a raw body, for malformed payloads.
pub fn raw_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a bodiless request.
pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Build a bodiless request carrying the admin key.
pub fn empty_request_with_admin_key(method: Method, uri: &str, key: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("X-Admin-Key", key)
        .body(Body::empty())
        .unwrap()
}

/// Build a GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    empty_request(Method::GET, uri)
}

/// Parse response body as JSON.
pub async fn parse_response_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(Value::Null)
}

/// Send a request and return status plus parsed body.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, parse_response_body(response).await)
}

/// Create a gift through the API (admin gate open) and return its JSON.
pub async fn create_test_gift(app: &Router, name: &str, quantity: i32) -> Value {
    let (status, body) = send(
        app,
        json_request(
            Method::POST,
            "/api/gifts",
            json!({ "name": name, "quantity": quantity }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create gift failed: {}", body);
    body
}

/// Reserve units of a gift as a randomly named visitor.
pub async fn reserve(app: &Router, gift_id: &str, quantity: i32) -> (StatusCode, Value) {
    reserve_as(app, gift_id, &Name().fake::<String>(), quantity).await
}

/// Reserve units of a gift as the named visitor.
pub async fn reserve_as(
    app: &Router,
    gift_id: &str,
    reserved_by: &str,
    quantity: i32,
) -> (StatusCode, Value) {
    send(
        app,
        json_request(
            Method::POST,
            "/api/reservations",
            json!({ "giftId": gift_id, "reservedBy": reserved_by, "quantity": quantity }),
        ),
    )
    .await
}

/// Fetch the derived view of one gift.
pub async fn get_gift(app: &Router, gift_id: &str) -> (StatusCode, Value) {
    send(app, get_request(&format!("/api/gifts/{}", gift_id))).await
}
