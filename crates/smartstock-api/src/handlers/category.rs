//! Category endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use smartstock_core::traits::Store;
use smartstock_database::CategoryStore;
use smartstock_entity::Category;

use crate::error::ApiError;
use crate::handlers::resource::{Resource, resource_routes};
use crate::handlers::respond;
use crate::state::AppState;

impl Resource for Category {
    const PATH: &'static str = "categories";

    fn store(state: &AppState) -> &dyn Store<Self> {
        state.stores.categories.as_store()
    }
}

/// Category routes, including the combo listing.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/categories/combo", get(combo))
        .merge(resource_routes::<Category>())
}

/// GET /api/categories/combo
pub async fn combo(State(state): State<AppState>) -> Result<Json<Vec<Category>>, ApiError> {
    let rows = respond(
        state.stores.categories.get_combo().await,
        StatusCode::BAD_REQUEST,
    )?;
    Ok(Json(rows))
}
