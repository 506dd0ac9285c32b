//! Pagination query extractor.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use smartstock_core::error::AppError;
use smartstock_core::types::Pagination;

use crate::error::ApiError;

/// `page`, `recordsnumber` and `filter` from the query string.
///
/// Missing values take their defaults and values below one are raised
/// to one, so handlers always see a usable window.
#[derive(Debug, Clone)]
pub struct PageParams(pub Pagination);

impl<S> FromRequestParts<S> for PageParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(raw) = Query::<Pagination>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;

        Ok(Self(Pagination {
            filter: raw.filter,
            ..Pagination::new(raw.page, raw.records_number)
        }))
    }
}
