//! # smartstock-core
//!
//! Core crate for SmartStock. Contains the store and file-storage traits,
//! configuration schemas, the [`ActionResult`] envelope returned by every
//! store operation, the pagination contract, and the unified error system.
//!
//! This crate has **no** internal dependencies on other SmartStock crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
pub use types::{ActionCode, ActionResult, Pagination};
