//! Company domain entity.

pub mod model;

pub use model::Company;
