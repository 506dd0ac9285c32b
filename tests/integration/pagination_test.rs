//! Integration tests for the paginated listings and filtered totals.

use axum::http::StatusCode;
use serde_json::Value;

use crate::helpers::TestApp;

fn names(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("Expected a JSON array")
        .iter()
        .map(|row| row["name"].as_str().unwrap_or_default().to_string())
        .collect()
}

async fn seeded() -> TestApp {
    let app = TestApp::new().await;
    for name in [
        "Tele E", "Radio", "Tele A", "Tele D", "tele c", "Nevera", "Tele B",
    ] {
        app.create_category(name).await;
    }
    app
}

#[tokio::test]
async fn test_pages_tile_filtered_listing() {
    let app = seeded().await;

    let all = app.request("GET", "/api/categories", None).await;
    let expected: Vec<String> = names(&all.body)
        .into_iter()
        .filter(|n| n.to_lowercase().contains("tele"))
        .take(4)
        .collect();

    let mut paged = Vec::new();
    for page in 1..=2 {
        let response = app
            .request(
                "GET",
                &format!("/api/categories/paginated?page={page}&recordsnumber=2&filter=TELE"),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
        paged.extend(names(&response.body));
    }

    assert_eq!(paged, expected);
}

#[tokio::test]
async fn test_short_and_empty_pages() {
    let app = seeded().await;

    let last = app
        .request(
            "GET",
            "/api/categories/paginated?page=3&recordsnumber=2&filter=tele",
            None,
        )
        .await;
    assert_eq!(last.status, StatusCode::OK);
    assert_eq!(names(&last.body).len(), 1);

    let past_end = app
        .request(
            "GET",
            "/api/categories/paginated?page=9&recordsnumber=2&filter=tele",
            None,
        )
        .await;
    assert_eq!(past_end.status, StatusCode::OK);
    assert!(names(&past_end.body).is_empty());
}

#[tokio::test]
async fn test_pagination_defaults() {
    let app = TestApp::new().await;
    for i in 0..12 {
        app.create_category(&format!("Categoria {i:02}")).await;
    }

    let response = app.request("GET", "/api/categories/paginated", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let rows = names(&response.body);
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0], "Categoria 00");

    let clamped = app
        .request("GET", "/api/categories/paginated?page=0&recordsnumber=0", None)
        .await;
    assert_eq!(clamped.status, StatusCode::OK);
    assert_eq!(names(&clamped.body), ["Categoria 00"]);
}

#[tokio::test]
async fn test_invalid_pagination_query() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/api/categories/paginated?page=abc", None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_total_records() {
    let app = seeded().await;

    let filtered = app
        .request("GET", "/api/categories/totalRecordsPaginated?filter=Tele", None)
        .await;
    assert_eq!(filtered.status, StatusCode::OK);
    assert_eq!(filtered.body, 5);

    let blank = app
        .request("GET", "/api/categories/totalRecordsPaginated?filter=%20%20", None)
        .await;
    assert_eq!(blank.body, 7);

    let none = app
        .request("GET", "/api/categories/totalRecordsPaginated", None)
        .await;
    assert_eq!(none.body, 7);
}

#[tokio::test]
async fn test_product_pagination_filters_by_name() {
    let app = TestApp::new().await;
    let tvs = app.create_category("Televisores").await;
    app.create_product("T-1", "Smart TV 55", tvs).await;
    app.create_product("T-2", "Smart TV 43", tvs).await;
    app.create_product("T-3", "Barra de sonido", tvs).await;

    let page = app
        .request(
            "GET",
            "/api/products/paginated?page=1&recordsnumber=10&filter=smart",
            None,
        )
        .await;
    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(names(&page.body), ["Smart TV 43", "Smart TV 55"]);
    assert_eq!(page.body[0]["category"]["name"], "Televisores");

    let total = app
        .request("GET", "/api/products/totalRecordsPaginated?filter=smart", None)
        .await;
    assert_eq!(total.body, 2);
}
