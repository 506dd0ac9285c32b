//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use smartstock_api::{AppState, build_app};
use smartstock_core::config::AppConfig;
use smartstock_database::Stores;
use smartstock_database::memory::MemoryDatabase;
use smartstock_storage::ImageStorage;

/// Smallest byte sequence recognised as a PNG.
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Web root holding stored images
    pub web_root: TempDir,
}

impl TestApp {
    /// Create a new test application on fresh in-memory stores
    pub async fn new() -> Self {
        let web_root = tempfile::tempdir().expect("Failed to create web root");

        let mut config = AppConfig::default();
        config.storage.web_root = web_root.path().display().to_string();

        let images = ImageStorage::new(web_root.path())
            .await
            .expect("Failed to init image storage");
        let stores = Stores::memory(MemoryDatabase::new());

        let router = build_app(AppState::new(config, stores, images));

        Self { router, web_root }
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Create a category and return its id
    pub async fn create_category(&self, name: &str) -> i64 {
        let response = self
            .request("POST", "/api/categories", Some(json!({ "name": name })))
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        response.body["id"].as_i64().expect("No id in category")
    }

    /// Create a product through the form endpoint and return the body
    pub async fn create_product(&self, code: &str, name: &str, category_id: i64) -> Value {
        let response = self
            .request(
                "POST",
                "/api/products/full",
                Some(product_input(code, name, category_id)),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        response.body
    }
}

/// A valid product form body without an image
pub fn product_input(code: &str, name: &str, category_id: i64) -> Value {
    json!({
        "code": code,
        "name": name,
        "unitPrice": 1250.5,
        "currentStock": 8,
        "minimumStock": 2,
        "categoryId": category_id,
    })
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
