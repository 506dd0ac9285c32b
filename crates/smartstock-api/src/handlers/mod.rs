//! Route handlers.
//!
//! [`resource`] holds the CRUD and pagination handlers shared by every
//! entity; the entity modules add their extra endpoints.

pub mod category;
pub mod company;
pub mod health;
pub mod product;
pub mod resource;

use axum::http::StatusCode;

use smartstock_core::error::AppError;
use smartstock_core::types::ActionResult;

use crate::error::ApiError;

/// Unwrap a store result, answering failures with `failure_status`.
pub(crate) fn respond<T>(result: ActionResult<T>, failure_status: StatusCode) -> Result<T, ApiError> {
    match result.into_result() {
        Ok(Some(value)) => Ok(value),
        Ok(None) => Err(AppError::internal("Store reported success without a result").into()),
        Err((code, message)) => Err(ApiError::action(failure_status, code, message)),
    }
}
