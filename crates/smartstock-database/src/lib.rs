//! # smartstock-database
//!
//! Store implementations for every SmartStock entity. Two engines share
//! the same contract: PostgreSQL through sqlx, and an in-memory engine that
//! enforces the same uniqueness, foreign-key and restrict-delete rules.
//! [`Stores`] bundles the stores of the engine selected in configuration.

pub mod connection;
pub mod memory;
pub mod migration;
mod outcome;
pub mod postgres;
pub mod stores;

pub use connection::DatabasePool;
pub use stores::{CategoryStore, ProductStore, Stores};
