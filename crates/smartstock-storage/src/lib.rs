//! # smartstock-storage
//!
//! File storage for uploaded product images: a local filesystem provider,
//! the container-organized [`ImageStorage`] served under `/images`, and
//! decoding of base64 uploads.

pub mod images;
pub mod providers;
pub mod upload;

pub use images::ImageStorage;
pub use providers::local::LocalStorageProvider;
pub use upload::{DecodedImage, decode_image};
