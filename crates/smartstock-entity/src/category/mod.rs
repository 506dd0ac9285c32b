//! Category domain entity.

pub mod model;

pub use model::Category;
