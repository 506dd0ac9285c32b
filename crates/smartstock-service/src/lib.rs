//! # smartstock-service
//!
//! Business logic on top of the stores. Services receive their
//! dependencies as `Arc` references at construction time.

pub mod product;

pub use product::ProductService;
