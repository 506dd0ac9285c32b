//! Integration tests for category endpoints.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_and_get_category() {
    let app = TestApp::new().await;
    let id = app.create_category("Televisores").await;

    let response = app.request("GET", &format!("/api/categories/{id}"), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], id);
    assert_eq!(response.body["name"], "Televisores");
    assert_eq!(response.body["productsCount"], 0);
}

#[tokio::test]
async fn test_get_category_not_found() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/categories/999", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
    assert_eq!(response.body["message"], "ERR001");
}

#[tokio::test]
async fn test_duplicate_category_name() {
    let app = TestApp::new().await;
    app.create_category("Neveras").await;

    let response = app
        .request("POST", "/api/categories", Some(json!({ "name": "Neveras" })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "CONSTRAINT_VIOLATION");
    assert_eq!(response.body["message"], "ERR003");
}

#[tokio::test]
async fn test_category_validation() {
    let app = TestApp::new().await;

    let empty = app
        .request("POST", "/api/categories", Some(json!({ "name": "" })))
        .await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);
    assert_eq!(empty.body["error"], "VALIDATION_ERROR");
    assert!(empty.body["details"]["name"].is_array());

    let too_long = app
        .request(
            "POST",
            "/api/categories",
            Some(json!({ "name": "x".repeat(101) })),
        )
        .await;
    assert_eq!(too_long.status, StatusCode::BAD_REQUEST);

    let missing = app
        .request("POST", "/api/categories", Some(json!({})))
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_update_category() {
    let app = TestApp::new().await;
    let id = app.create_category("Audio").await;

    let response = app
        .request(
            "PUT",
            "/api/categories",
            Some(json!({ "id": id, "name": "Audio y video" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Audio y video");

    let missing = app
        .request(
            "PUT",
            "/api/categories",
            Some(json!({ "id": 999, "name": "Nada" })),
        )
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.body["message"], "ERR001");
}

#[tokio::test]
async fn test_delete_category_in_use() {
    let app = TestApp::new().await;
    let id = app.create_category("Televisores").await;
    let product = app.create_product("TELE-001", "Smart TV", id).await;

    let response = app
        .request("DELETE", &format!("/api/categories/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "DELETE_FAILED");
    assert_eq!(response.body["message"], "ERR002");

    let category = app.request("GET", &format!("/api/categories/{id}"), None).await;
    assert_eq!(category.status, StatusCode::OK);
    assert_eq!(category.body["productsCount"], 1);

    let product_id = product["id"].as_i64().unwrap();
    let product = app
        .request("GET", &format!("/api/products/{product_id}"), None)
        .await;
    assert_eq!(product.status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_category() {
    let app = TestApp::new().await;
    let id = app.create_category("Temporal").await;

    let response = app
        .request("DELETE", &format!("/api/categories/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let again = app
        .request("DELETE", &format!("/api/categories/{id}"), None)
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
    assert_eq!(again.body["message"], "ERR001");
}

#[tokio::test]
async fn test_category_combo() {
    let app = TestApp::new().await;
    for name in ["Televisores", "Audio", "Neveras"] {
        app.create_category(name).await;
    }

    let response = app.request("GET", "/api/categories/combo", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let names: Vec<&str> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Audio", "Neveras", "Televisores"]);
    assert_eq!(names.iter().filter(|n| **n == "Televisores").count(), 1);
}

#[tokio::test]
async fn test_category_combo_ignores_case() {
    let app = TestApp::new().await;
    for name in ["Tele B", "tele a", "Tele C"] {
        app.create_category(name).await;
    }

    let response = app.request("GET", "/api/categories/combo", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let names: Vec<&str> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["tele a", "Tele B", "Tele C"]);
}
