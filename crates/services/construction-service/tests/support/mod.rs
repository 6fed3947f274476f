//! Shared helpers for API integration tests.
//!
//! Every test gets its own in-memory SQLite database, migrated with the
//! production migrator and served through the full router.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, Response},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use common::DatabaseConfig;
use construction_service_lib::api::{create_router, AppState};
use construction_service_lib::infra::Database;

/// Build the application over a fresh in-memory database without cache.
pub async fn app() -> Router {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    };
    let db = Database::connect(&config).await.unwrap();
    create_router(AppState::new(db, None))
}

/// Send a request with an optional JSON body.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Read the raw response body.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

/// Read the response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Read a response header as a string.
pub fn header<'a>(response: &'a Response<Body>, name: &str) -> Option<&'a str> {
    response.headers().get(name).and_then(|v| v.to_str().ok())
}

/// Number of entities reported by `X-Total-Count` for a collection.
pub async fn total_count(app: &Router, collection: &str) -> u64 {
    let response = get(app, &format!("/api/{}", collection)).await;
    header(&response, "x-total-count").unwrap().parse().unwrap()
}
