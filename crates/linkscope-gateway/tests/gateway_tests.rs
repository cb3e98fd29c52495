// SPDX-FileCopyrightText: 2026 Linkscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests for the Linkscope HTTP API.
//!
//! Drives the axum router directly (no TCP) against a tempfile-backed
//! database, covering the full request -> auth -> store -> response path.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::util::ServiceExt;

use linkscope_gateway::auth::AuthConfig;
use linkscope_gateway::server::{GatewayState, build_router};
use linkscope_storage::Database;
use linkscope_storage::queries::{results, urls};

const API_KEY: &str = "test-key";

async fn setup() -> (Router, Arc<Database>, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("test.db");
    let db = Arc::new(
        Database::open(db_path.to_str().unwrap(), true)
            .await
            .unwrap(),
    );
    let state = GatewayState {
        db: db.clone(),
        auth: AuthConfig {
            api_key: API_KEY.to_string(),
        },
    };
    (build_router(state), db, dir)
}

fn post(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-api-key", API_KEY)
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("x-api-key", API_KEY)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn root_is_public() {
    let (app, _db, _dir) = setup().await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(!bytes.is_empty());
}

#[tokio::test]
async fn add_list_delete_url_scenario() {
    let (app, _db, _dir) = setup().await;

    // Submit a url.
    let response = app
        .clone()
        .oneshot(post("/add-url", &json!({"url": "https://example.com"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"message": "URL saved"}));

    // It lists with id 1 on a fresh database.
    let response = app.clone().oneshot(get("/urls")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!([{"id": 1, "url": "https://example.com"}])
    );

    // Delete it.
    let response = app
        .clone()
        .oneshot(post("/delete-urls", &json!({"ids": [1]})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"message": "URLs deleted"}));

    // The listing is empty again.
    let response = app.clone().oneshot(get("/urls")).await.unwrap();
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn urls_list_newest_first() {
    let (app, _db, _dir) = setup().await;

    for url in ["https://a.example", "https://b.example", "https://c.example"] {
        let response = app
            .clone()
            .oneshot(post("/add-url", &json!({"url": url})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let body = body_json(app.clone().oneshot(get("/urls")).await.unwrap()).await;
    let listed: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["url"].as_str().unwrap())
        .collect();
    assert_eq!(
        listed,
        vec!["https://c.example", "https://b.example", "https://a.example"]
    );
}

#[tokio::test]
async fn add_url_empty_is_400_without_row() {
    let (app, db, _dir) = setup().await;

    let response = app
        .clone()
        .oneshot(post("/add-url", &json!({"url": ""})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].is_string());

    assert!(urls::list_urls(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn add_url_missing_field_is_400() {
    let (app, _db, _dir) = setup().await;

    let response = app
        .clone()
        .oneshot(post("/add-url", &json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Invalid request"})
    );
}

#[tokio::test]
async fn delete_urls_empty_ids_is_400_without_mutation() {
    let (app, db, _dir) = setup().await;

    urls::insert_url(&db, "https://example.com").await.unwrap();

    let response = app
        .clone()
        .oneshot(post("/delete-urls", &json!({"ids": []})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(urls::list_urls(&db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_urls_is_idempotent_for_unknown_ids() {
    let (app, _db, _dir) = setup().await;

    // Ids that never existed delete successfully, twice.
    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(post("/delete-urls", &json!({"ids": [42, 43]})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn add_result_round_trips_every_field() {
    let (app, _db, _dir) = setup().await;

    let payload = json!({
        "url": "https://example.com",
        "hostname": "example.com",
        "title": "Example Domain",
        "htmlVersion": "HTML 5",
        "h1": 1, "h2": 4, "h3": 2, "h4": 0, "h5": 0, "h6": 0,
        "internalLinks": 12,
        "externalLinks": 5,
        "inaccessibleLinks": 1,
        "hasLoginForm": true,
        "error": "",
        "inaccessibleLinksList": "[\"https://example.com/dead\"]"
    });

    let response = app
        .clone()
        .oneshot(post("/add-result", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"message": "Result saved"})
    );

    let body = body_json(app.clone().oneshot(get("/results")).await.unwrap()).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    let stored = &rows[0];

    // Every submitted field round-trips under its camelCase name.
    for (key, value) in payload.as_object().unwrap() {
        assert_eq!(&stored[key], value, "field {key} should round-trip");
    }
    // Store-assigned fields are present.
    assert!(stored["id"].as_i64().unwrap() > 0);
    assert!(!stored["createdAt"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn add_result_zero_fills_missing_fields() {
    let (app, _db, _dir) = setup().await;

    let response = app
        .clone()
        .oneshot(post("/add-result", &json!({"url": "https://example.com"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(app.clone().oneshot(get("/results")).await.unwrap()).await;
    let stored = &body.as_array().unwrap()[0];
    assert_eq!(stored["url"], "https://example.com");
    assert_eq!(stored["h1"], 0);
    assert_eq!(stored["hasLoginForm"], false);
    assert_eq!(stored["error"], "");
}

#[tokio::test]
async fn add_result_malformed_body_is_400() {
    let (app, _db, _dir) = setup().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/add-result")
                .header("content-type", "application/json")
                .header("x-api-key", API_KEY)
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_results_scenario() {
    let (app, db, _dir) = setup().await;

    results::insert_result(&db, &Default::default()).await.unwrap();
    results::insert_result(&db, &Default::default()).await.unwrap();

    let response = app
        .clone()
        .oneshot(post("/delete-results", &json!({"ids": [1, 2]})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"message": "Results deleted"})
    );

    assert!(results::list_results(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_api_key_is_401_without_side_effect() {
    let (app, db, _dir) = setup().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/add-url")
                .header("content-type", "application/json")
                .body(Body::from(json!({"url": "https://example.com"}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Invalid or missing API key"})
    );

    // Nothing was inserted.
    assert!(urls::list_urls(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn wrong_api_key_is_401() {
    let (app, _db, _dir) = setup().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/urls")
                .header("x-api-key", "not-the-key")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn every_protected_route_requires_the_key() {
    let (app, _db, _dir) = setup().await;

    let routes = [
        ("GET", "/urls"),
        ("GET", "/results"),
        ("POST", "/add-url"),
        ("POST", "/delete-urls"),
        ("POST", "/add-result"),
        ("POST", "/delete-results"),
    ];

    for (method, uri) in routes {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "{method} {uri} should be gated"
        );
    }
}
