//! Product endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};

use smartstock_core::traits::Store;
use smartstock_database::ProductStore;
use smartstock_entity::{Product, ProductInput};

use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::handlers::resource::{Resource, resource_routes};
use crate::handlers::respond;
use crate::state::AppState;

impl Resource for Product {
    const PATH: &'static str = "products";

    fn store(state: &AppState) -> &dyn Store<Self> {
        state.stores.products.as_store()
    }
}

/// Product routes, including the combo listing and the form endpoints.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products/combo/{category_id}", get(by_category_combo))
        .route("/products/full", post(create_full).put(update_full))
        .merge(resource_routes::<Product>())
}

/// GET /api/products/combo/{category_id}
pub async fn by_category_combo(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let rows = respond(
        state.stores.products.get_by_category_combo(category_id).await,
        StatusCode::BAD_REQUEST,
    )?;
    Ok(Json(rows))
}

/// POST /api/products/full
pub async fn create_full(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> Result<Json<Product>, ApiError> {
    let product = respond(
        state.product_service.add_from_input(input).await,
        StatusCode::BAD_REQUEST,
    )?;
    Ok(Json(product))
}

/// PUT /api/products/full
pub async fn update_full(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> Result<Json<Product>, ApiError> {
    let product = respond(
        state.product_service.update_from_input(input).await,
        StatusCode::BAD_REQUEST,
    )?;
    Ok(Json(product))
}
