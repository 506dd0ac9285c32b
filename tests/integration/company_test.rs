//! Integration tests for company endpoints.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_company_crud() {
    let app = TestApp::new().await;

    let created = app
        .request(
            "POST",
            "/api/companies",
            Some(json!({
                "name": "Distribuciones Andinas",
                "nit": "900123456-7",
                "email": "ventas@andinas.co",
            })),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK, "{:?}", created.body);
    let id = created.body["id"].as_i64().unwrap();
    assert_eq!(created.body["isActive"], true);

    let mut company = created.body.clone();
    company["phone"] = json!("+57 300 000 0000");
    company["isActive"] = json!(false);
    let updated = app.request("PUT", "/api/companies", Some(company)).await;
    assert_eq!(updated.status, StatusCode::OK, "{:?}", updated.body);
    assert_eq!(updated.body["phone"], "+57 300 000 0000");
    assert_eq!(updated.body["isActive"], false);

    let fetched = app.request("GET", &format!("/api/companies/{id}"), None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["nit"], "900123456-7");

    let deleted = app
        .request("DELETE", &format!("/api/companies/{id}"), None)
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let list = app.request("GET", "/api/companies", None).await;
    assert_eq!(list.body, json!([]));
}

#[tokio::test]
async fn test_company_validation() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/companies",
            Some(json!({
                "name": "Sin correo",
                "nit": "1",
                "email": "no-es-un-correo",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(response.body["details"]["email"].is_array());
}

#[tokio::test]
async fn test_company_paginated() {
    let app = TestApp::new().await;
    for (name, nit) in [("Zeta S.A.", "3"), ("Alfa Ltda", "1"), ("Beta SAS", "2")] {
        app.request(
            "POST",
            "/api/companies",
            Some(json!({ "name": name, "nit": nit })),
        )
        .await;
    }

    let page = app
        .request("GET", "/api/companies/paginated?page=1&recordsnumber=2", None)
        .await;
    assert_eq!(page.status, StatusCode::OK);
    let names: Vec<&str> = page
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Alfa Ltda", "Beta SAS"]);
}
