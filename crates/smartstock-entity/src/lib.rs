//! # smartstock-entity
//!
//! Domain entity models for SmartStock. Every entity is a table row and
//! derives `sqlx::FromRow` plus `validator::Validate` for the structural
//! rules the transport enforces before a store runs. JSON uses camelCase
//! field names.

pub mod category;
pub mod company;
pub mod entity;
pub mod product;
mod serde_date;

pub use category::Category;
pub use company::Company;
pub use entity::Entity;
pub use product::{Product, ProductInput, NO_IMAGE_PATH};
