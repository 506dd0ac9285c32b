//! # smartstock-api
//!
//! HTTP API layer for SmartStock built on Axum.
//!
//! Every entity is exposed through the same generic resource routes;
//! categories and products add their combo and image-aware endpoints.
//! Store results are translated to status codes here and nowhere else.

pub mod app;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
