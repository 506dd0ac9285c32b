//! PostgreSQL store implementations.

pub mod category;
pub mod company;
pub mod product;
pub mod table;

pub use category::PgCategoryStore;
pub use product::PgProductStore;
pub use table::{PgStore, PgTable};
