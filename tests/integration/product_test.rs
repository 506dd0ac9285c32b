//! Integration tests for product endpoints.

use axum::http::StatusCode;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};

use crate::helpers::{PNG_BYTES, TestApp, product_input};

fn with_image(mut input: Value, image: &str) -> Value {
    input["image"] = Value::String(image.to_string());
    input
}

#[tokio::test]
async fn test_create_product_without_image() {
    let app = TestApp::new().await;
    let category_id = app.create_category("Televisores").await;

    let product = app.create_product("TELE-001", "Smart TV", category_id).await;

    assert!(product["id"].as_i64().unwrap() > 0);
    assert!(product["image"].is_null());
    assert_eq!(product["imageFull"], "/images/NoImage.png");
    assert_eq!(product["unitPrice"], 1250.5);

    let combo = app
        .request("GET", &format!("/api/products/combo/{category_id}"), None)
        .await;
    assert_eq!(combo.status, StatusCode::OK);
    let rows = combo.body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["code"], "TELE-001");
}

#[tokio::test]
async fn test_get_product_includes_category() {
    let app = TestApp::new().await;
    let category_id = app.create_category("Neveras").await;
    let product = app.create_product("NEV-1", "Nevera", category_id).await;
    let id = product["id"].as_i64().unwrap();

    let response = app.request("GET", &format!("/api/products/{id}"), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["category"]["name"], "Neveras");
    assert_eq!(response.body["categoryId"], category_id);
}

#[tokio::test]
async fn test_create_product_with_image() {
    let app = TestApp::new().await;
    let category_id = app.create_category("Televisores").await;
    let payload = STANDARD.encode(PNG_BYTES);

    let first = app
        .request(
            "POST",
            "/api/products/full",
            Some(with_image(product_input("A", "Uno", category_id), &payload)),
        )
        .await;
    assert_eq!(first.status, StatusCode::OK, "{:?}", first.body);

    let data_url = format!("data:image/png;base64,{payload}");
    let second = app
        .request(
            "POST",
            "/api/products/full",
            Some(with_image(product_input("B", "Dos", category_id), &data_url)),
        )
        .await;
    assert_eq!(second.status, StatusCode::OK, "{:?}", second.body);

    let first_path = first.body["image"].as_str().unwrap().to_string();
    let second_path = second.body["image"].as_str().unwrap().to_string();
    for path in [&first_path, &second_path] {
        assert!(path.starts_with("/images/products/"), "{path}");
        assert!(path.ends_with(".png"), "{path}");
        let file = path.trim_start_matches('/');
        assert!(app.web_root.path().join(file).is_file(), "{path}");
    }
    assert_ne!(first_path, second_path);
    assert_eq!(first.body["imageFull"], first_path.as_str());
}

#[tokio::test]
async fn test_create_product_with_invalid_image() {
    let app = TestApp::new().await;
    let category_id = app.create_category("Televisores").await;

    let response = app
        .request(
            "POST",
            "/api/products/full",
            Some(with_image(
                product_input("A", "Uno", category_id),
                "not base64 at all!",
            )),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "UNEXPECTED");

    let all = app.request("GET", "/api/products", None).await;
    assert_eq!(all.body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_create_product_missing_category() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/products/full",
            Some(product_input("A", "Huérfano", 42)),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "CATEGORY_NOT_FOUND");
    assert_eq!(response.body["message"], "ERR004");
}

#[tokio::test]
async fn test_generic_product_writes_check_category() {
    let app = TestApp::new().await;
    let tvs = app.create_category("Televisores").await;

    let orphan = app
        .request("POST", "/api/products", Some(product_input("A", "Huérfano", 999)))
        .await;
    assert_eq!(orphan.status, StatusCode::BAD_REQUEST);
    assert_eq!(orphan.body["error"], "CATEGORY_NOT_FOUND");
    assert_eq!(orphan.body["message"], "ERR004");

    let created = app
        .request("POST", "/api/products", Some(product_input("A", "Smart TV", tvs)))
        .await;
    assert_eq!(created.status, StatusCode::OK, "{:?}", created.body);
    let id = created.body["id"].as_i64().unwrap();

    let duplicate = app
        .request("POST", "/api/products", Some(product_input("A", "Otro", tvs)))
        .await;
    assert_eq!(duplicate.body["error"], "CONSTRAINT_VIOLATION");
    assert_eq!(duplicate.body["message"], "ERR003");

    let mut moved = product_input("A", "Smart TV", 999);
    moved["id"] = json!(id);
    let response = app.request("PUT", "/api/products", Some(moved)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "CATEGORY_NOT_FOUND");
    assert_eq!(response.body["message"], "ERR004");

    let unchanged = app.request("GET", &format!("/api/products/{id}"), None).await;
    assert_eq!(unchanged.body["categoryId"], tvs);
}

#[tokio::test]
async fn test_product_validation() {
    let app = TestApp::new().await;
    let category_id = app.create_category("Televisores").await;

    let mut negative = product_input("A", "Uno", category_id);
    negative["unitPrice"] = json!(-1);
    let response = app
        .request("POST", "/api/products/full", Some(negative))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    let mut no_code = product_input("", "Uno", category_id);
    no_code["categoryId"] = json!(0);
    let response = app.request("POST", "/api/products/full", Some(no_code)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(response.body["details"]["code"].is_array());
}

#[tokio::test]
async fn test_duplicate_code_in_category() {
    let app = TestApp::new().await;
    let tvs = app.create_category("Televisores").await;
    let fridges = app.create_category("Neveras").await;
    app.create_product("X-1", "Smart TV", tvs).await;

    let duplicate = app
        .request("POST", "/api/products/full", Some(product_input("X-1", "Otro", tvs)))
        .await;
    assert_eq!(duplicate.status, StatusCode::BAD_REQUEST);
    assert_eq!(duplicate.body["error"], "CONSTRAINT_VIOLATION");
    assert_eq!(duplicate.body["message"], "ERR003");

    app.create_product("X-1", "Nevera", fridges).await;
}

#[tokio::test]
async fn test_update_product_full() {
    let app = TestApp::new().await;
    let tvs = app.create_category("Televisores").await;
    let audio = app.create_category("Audio").await;
    let product = app.create_product("TELE-001", "Smart TV", tvs).await;
    let id = product["id"].as_i64().unwrap();

    let mut input = product_input("TELE-001", "Smart TV 55", audio);
    input["id"] = json!(id);
    input["currentStock"] = json!(3);
    input["expirationDate"] = json!("2030-01-31T00:00:00");
    let response = app.request("PUT", "/api/products/full", Some(input)).await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["name"], "Smart TV 55");
    assert_eq!(response.body["currentStock"], 3);
    assert_eq!(response.body["categoryId"], audio);
    assert_eq!(response.body["expirationDate"], "2030-01-31");
}

#[tokio::test]
async fn test_update_product_missing_category_leaves_row() {
    let app = TestApp::new().await;
    let tvs = app.create_category("Televisores").await;
    let product = app.create_product("TELE-001", "Smart TV", tvs).await;
    let id = product["id"].as_i64().unwrap();

    let mut input = product_input("TELE-001", "Cambiado", 999);
    input["id"] = json!(id);
    let response = app.request("PUT", "/api/products/full", Some(input)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "ERR004");

    let unchanged = app.request("GET", &format!("/api/products/{id}"), None).await;
    assert_eq!(unchanged.body["name"], "Smart TV");
    assert_eq!(unchanged.body["categoryId"], tvs);
}

#[tokio::test]
async fn test_update_missing_product() {
    let app = TestApp::new().await;
    let tvs = app.create_category("Televisores").await;

    let mut input = product_input("TELE-001", "Fantasma", tvs);
    input["id"] = json!(777);
    let response = app.request("PUT", "/api/products/full", Some(input)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "PRODUCT_NOT_FOUND");
    assert_eq!(response.body["message"], "ERR005");
}

#[tokio::test]
async fn test_delete_product() {
    let app = TestApp::new().await;
    let tvs = app.create_category("Televisores").await;
    let product = app.create_product("TELE-001", "Smart TV", tvs).await;
    let id = product["id"].as_i64().unwrap();

    let response = app.request("DELETE", &format!("/api/products/{id}"), None).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let gone = app.request("GET", &format!("/api/products/{id}"), None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}
