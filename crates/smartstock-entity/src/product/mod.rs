//! Product domain entity and its input shape.

pub mod input;
pub mod model;

pub use input::ProductInput;
pub use model::{NO_IMAGE_PATH, Product};
