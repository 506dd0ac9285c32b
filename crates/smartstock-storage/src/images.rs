//! Container-organized image storage under the web root.
//!
//! Files are written to `<web_root>/images/<container>/<uuid>.<ext>` and
//! addressed by clients as `/images/<container>/<uuid>.<ext>`.

use std::path::Path;

use async_trait::async_trait;
use bytes::Bytes;
use tracing::{debug, info};
use uuid::Uuid;

use smartstock_core::error::AppError;
use smartstock_core::result::AppResult;
use smartstock_core::traits::storage::{FileStorage, StorageProvider};

use crate::providers::local::LocalStorageProvider;

/// URL prefix and directory name images are kept under.
pub const IMAGES_DIR: &str = "images";

/// [`FileStorage`] over the local web root.
#[derive(Debug, Clone)]
pub struct ImageStorage {
    provider: LocalStorageProvider,
}

impl ImageStorage {
    /// Open the image storage below `web_root`, creating the images
    /// directory if needed.
    pub async fn new(web_root: impl AsRef<Path>) -> AppResult<Self> {
        let provider = LocalStorageProvider::new(web_root.as_ref().join(IMAGES_DIR)).await?;
        info!(root = %provider.root().display(), "Image storage ready");
        Ok(Self { provider })
    }

    /// Directory served at `/images`.
    pub fn images_root(&self) -> &Path {
        self.provider.root()
    }

    /// Whether the storage root is usable.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.provider.health_check().await
    }

    /// Read back a stored image by its public path.
    pub async fn read(&self, public_path: &str, container: &str) -> AppResult<Bytes> {
        let relative = relative_path(public_path, container)?;
        self.provider.read_bytes(&relative).await
    }

    /// Whether the public path refers to an existing file.
    pub async fn exists(&self, public_path: &str, container: &str) -> AppResult<bool> {
        let relative = relative_path(public_path, container)?;
        self.provider.exists(&relative).await
    }
}

/// Map a public path onto `<container>/<file>` inside the images root.
/// Accepts `/images/<container>/<file>`, `<container>/<file>` or a bare
/// file name. A path naming another container is rejected.
fn relative_path(public_path: &str, container: &str) -> AppResult<String> {
    let trimmed = public_path.trim_start_matches('/');
    let trimmed = trimmed
        .strip_prefix(IMAGES_DIR)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(trimmed);
    let file_name = match trimmed.rsplit_once('/') {
        Some((dir, _)) if dir != container => {
            return Err(AppError::validation(format!(
                "Image path '{public_path}' is outside container '{container}'"
            )));
        }
        Some((_, file_name)) => file_name,
        None => trimmed,
    };
    if file_name.is_empty() || file_name == "." || file_name == ".." {
        return Err(AppError::validation(format!("Invalid image path: '{public_path}'")));
    }
    Ok(format!("{container}/{file_name}"))
}

fn validate_segment(value: &str, what: &str) -> AppResult<()> {
    let ok = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if ok {
        Ok(())
    } else {
        Err(AppError::validation(format!("Invalid {what}: '{value}'")))
    }
}

#[async_trait]
impl FileStorage for ImageStorage {
    async fn save(&self, content: Bytes, extension: &str, container: &str) -> AppResult<String> {
        validate_segment(container, "container")?;
        let extension = extension.trim_start_matches('.');
        validate_segment(extension, "extension")?;

        let file_name = format!("{}.{}", Uuid::new_v4(), extension.to_ascii_lowercase());
        let relative = format!("{container}/{file_name}");
        self.provider.write(&relative, content).await?;

        let public = format!("/{IMAGES_DIR}/{relative}");
        debug!(path = %public, "Stored image");
        Ok(public)
    }

    async fn remove(&self, path: &str, container: &str) -> AppResult<()> {
        validate_segment(container, "container")?;
        let relative = relative_path(path, container)?;
        self.provider.delete(&relative).await?;
        debug!(path, "Removed image");
        Ok(())
    }
}
