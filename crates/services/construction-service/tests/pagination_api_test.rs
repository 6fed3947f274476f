//! Pagination and health integration tests.

mod support;

use axum::http::StatusCode;
use serde_json::json;

use support::{app, body_json, get, header, post};

async fn seed_buildings(app: &axum::Router, count: usize) {
    for i in 1..=count {
        post(app, "/api/buildings", json!({"name": format!("Tower {}", i)})).await;
    }
}

fn ids(body: &serde_json::Value) -> Vec<i64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn list_defaults_to_first_page_ordered_by_id() {
    let app = app().await;
    seed_buildings(&app, 3).await;

    let response = get(&app, "/api/buildings").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header(&response, "x-total-count"), Some("3"));

    let link = header(&response, "link").unwrap().to_string();
    assert!(!link.contains("rel=\"next\""));
    assert!(link.contains("rel=\"first\""));

    assert_eq!(ids(&body_json(response).await), vec![1, 2, 3]);
}

#[tokio::test]
async fn sort_by_id_desc_lists_newest_first() {
    let app = app().await;
    seed_buildings(&app, 3).await;

    let response = get(&app, "/api/buildings?sort=id,desc").await;
    assert_eq!(ids(&body_json(response).await), vec![3, 2, 1]);
}

#[tokio::test]
async fn pages_are_bounded_and_linked() {
    let app = app().await;
    seed_buildings(&app, 5).await;

    let response = get(&app, "/api/buildings?page=1&size=2").await;
    assert_eq!(header(&response, "x-total-count"), Some("5"));

    let link = header(&response, "link").unwrap().to_string();
    assert!(link.contains("</api/buildings?page=2&size=2>; rel=\"next\""));
    assert!(link.contains("</api/buildings?page=0&size=2>; rel=\"prev\""));
    assert!(link.contains("</api/buildings?page=2&size=2>; rel=\"last\""));

    assert_eq!(ids(&body_json(response).await), vec![3, 4]);
}

#[tokio::test]
async fn page_past_the_end_is_empty() {
    let app = app().await;
    seed_buildings(&app, 2).await;

    let response = get(&app, "/api/buildings?page=9").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header(&response, "x-total-count"), Some("2"));
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn multiple_sort_parameters_apply_in_order() {
    let app = app().await;
    for name in ["B", "A", "B"] {
        post(&app, "/api/buildings", json!({"name": name})).await;
    }

    let response = get(&app, "/api/buildings?sort=name,asc&sort=id,desc").await;
    assert_eq!(ids(&body_json(response).await), vec![2, 3, 1]);
}

#[tokio::test]
async fn unknown_sort_property_is_rejected() {
    let app = app().await;

    let response = get(&app, "/api/buildings?sort=height,desc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn invalid_page_parameter_is_rejected() {
    let app = app().await;

    let response = get(&app, "/api/buildings?page=first").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn oversized_page_index_is_rejected() {
    let app = app().await;
    seed_buildings(&app, 1).await;

    for uri in [
        "/api/buildings?page=18446744073709551615&size=20",
        "/api/buildings?page=922337203685477580&size=20",
        "/api/floors/1/apartments?page=18446744073709551615",
    ] {
        let response = get(&app, uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    // The furthest bindable page is simply empty.
    let response = get(&app, "/api/buildings?page=461168601842738790&size=20").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn health_reports_database_status() {
    let app = app().await;

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["database"]["status"], "healthy");
    assert!(body["services"].get("redis").is_none());
}
