//! Request extractors that reject with [`ApiError`](crate::error::ApiError).

pub mod json;
pub mod pagination;

pub use json::ValidatedJson;
pub use pagination::PageParams;
