//! Integration tests for the health endpoint and image serving.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tower::ServiceExt;

use crate::helpers::{PNG_BYTES, TestApp, product_input};

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database_provider"], "memory");
    assert_eq!(response.body["database"], true);
    assert_eq!(response.body["storage"], true);
}

#[tokio::test]
async fn test_stored_image_is_served() {
    let app = TestApp::new().await;
    let category_id = app.create_category("Televisores").await;

    let mut input = product_input("TELE-001", "Smart TV", category_id);
    input["image"] = STANDARD.encode(PNG_BYTES).into();
    let created = app.request("POST", "/api/products/full", Some(input)).await;
    assert_eq!(created.status, StatusCode::OK, "{:?}", created.body);
    let path = created.body["image"].as_str().unwrap().to_string();

    let response = app
        .router
        .clone()
        .oneshot(Request::get(&path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
    assert_eq!(&bytes[..], PNG_BYTES);
}

#[tokio::test]
async fn test_unknown_route() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/warehouses", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
