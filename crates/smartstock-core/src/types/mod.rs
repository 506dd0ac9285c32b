//! Core type definitions used across the SmartStock workspace.

pub mod action;
pub mod pagination;

pub use action::{ActionCode, ActionResult};
pub use pagination::Pagination;
