//! Core traits defined in `smartstock-core` and implemented by other crates.

pub mod storage;
pub mod store;

pub use storage::{FileStorage, StorageProvider};
pub use store::Store;
