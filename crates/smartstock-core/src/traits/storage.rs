//! File storage traits.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Byte-level access to a storage backend, addressed by relative paths.
#[async_trait]
pub trait StorageProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Read a file into memory as a complete byte vector.
    async fn read_bytes(&self, path: &str) -> AppResult<Bytes>;

    /// Write bytes to a file at the given path.
    async fn write(&self, path: &str, data: Bytes) -> AppResult<()>;

    /// Delete a file at the given path.
    async fn delete(&self, path: &str) -> AppResult<()>;

    /// Check whether a file or directory exists at the given path.
    async fn exists(&self, path: &str) -> AppResult<bool>;
}

/// Container-organized file storage used for uploaded images.
#[async_trait]
pub trait FileStorage: Send + Sync + std::fmt::Debug + 'static {
    /// Store `content` under a fresh name in `container` and return the
    /// root-relative path clients use to fetch it.
    async fn save(&self, content: Bytes, extension: &str, container: &str) -> AppResult<String>;

    /// Remove a file previously returned by [`FileStorage::save`].
    /// Removing a missing file is not an error.
    async fn remove(&self, path: &str, container: &str) -> AppResult<()>;
}
