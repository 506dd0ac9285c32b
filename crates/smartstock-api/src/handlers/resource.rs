//! Generic REST mapping over any [`Store`].
//!
//! Every entity gets the same surface under `/api/{path}`: list, fetch by
//! id, paginated listing, filtered total, create, full update and delete.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde::de::DeserializeOwned;
use validator::Validate;

use smartstock_core::traits::Store;
use smartstock_core::types::ActionCode;
use smartstock_entity::Entity;

use crate::error::ApiError;
use crate::extractors::{PageParams, ValidatedJson};
use crate::handlers::respond;
use crate::state::AppState;

/// An entity exposed as a REST resource.
pub trait Resource: Entity + Serialize + DeserializeOwned + Validate {
    /// Collection segment under `/api`.
    const PATH: &'static str;

    /// The store serving this entity.
    fn store(state: &AppState) -> &dyn Store<Self>;
}

/// Routes shared by every resource.
pub fn resource_routes<E: Resource>() -> Router<AppState> {
    let base = format!("/{}", E::PATH);
    Router::new()
        .route(&base, get(list::<E>).post(create::<E>).put(update::<E>))
        .route(&format!("{base}/paginated"), get(paginated::<E>))
        .route(&format!("{base}/totalRecordsPaginated"), get(total::<E>))
        .route(&format!("{base}/{{id}}"), get(get_by_id::<E>).delete(remove::<E>))
}

/// GET /api/{path}
pub async fn list<E: Resource>(State(state): State<AppState>) -> Result<Json<Vec<E>>, ApiError> {
    let rows = respond(E::store(&state).get_all().await, StatusCode::BAD_REQUEST)?;
    Ok(Json(rows))
}

/// GET /api/{path}/{id}
pub async fn get_by_id<E: Resource>(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<E>, ApiError> {
    let row = respond(E::store(&state).get_by_id(id).await, StatusCode::NOT_FOUND)?;
    Ok(Json(row))
}

/// GET /api/{path}/paginated?page=&recordsnumber=&filter=
pub async fn paginated<E: Resource>(
    State(state): State<AppState>,
    PageParams(pagination): PageParams,
) -> Result<Json<Vec<E>>, ApiError> {
    let rows = respond(
        E::store(&state).get_page(&pagination).await,
        StatusCode::BAD_REQUEST,
    )?;
    Ok(Json(rows))
}

/// GET /api/{path}/totalRecordsPaginated?filter=
pub async fn total<E: Resource>(
    State(state): State<AppState>,
    PageParams(pagination): PageParams,
) -> Result<Json<u64>, ApiError> {
    let total = respond(
        E::store(&state).get_total_count(&pagination).await,
        StatusCode::BAD_REQUEST,
    )?;
    Ok(Json(total))
}

/// POST /api/{path}
pub async fn create<E: Resource>(
    State(state): State<AppState>,
    ValidatedJson(entity): ValidatedJson<E>,
) -> Result<Json<E>, ApiError> {
    let row = respond(E::store(&state).add(entity).await, StatusCode::BAD_REQUEST)?;
    Ok(Json(row))
}

/// PUT /api/{path}
pub async fn update<E: Resource>(
    State(state): State<AppState>,
    ValidatedJson(entity): ValidatedJson<E>,
) -> Result<Json<E>, ApiError> {
    let row = respond(E::store(&state).update(entity).await, StatusCode::BAD_REQUEST)?;
    Ok(Json(row))
}

/// DELETE /api/{path}/{id}
pub async fn remove<E: Resource>(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let result = E::store(&state).delete(id).await;
    let status = match result.code() {
        Some(ActionCode::NotFound) => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_REQUEST,
    };
    match result.into_result() {
        Ok(_) => Ok(StatusCode::NO_CONTENT),
        Err((code, message)) => Err(ApiError::action(status, code, message)),
    }
}
