//! Image storage configuration.

use serde::{Deserialize, Serialize};

/// Top-level storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory served as the web root. Images live under `<web_root>/images`.
    #[serde(default = "default_web_root")]
    pub web_root: String,
    /// Product image settings.
    #[serde(default)]
    pub images: ImageStorageConfig,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            web_root: default_web_root(),
            images: ImageStorageConfig::default(),
        }
    }
}

/// Product image settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageStorageConfig {
    /// Container (sub-directory of `images/`) product images are written to.
    #[serde(default = "default_container")]
    pub container: String,
    /// Delete the previous file when a product update uploads a new image.
    #[serde(default)]
    pub remove_replaced: bool,
}

impl Default for ImageStorageConfig {
    fn default() -> Self {
        Self {
            container: default_container(),
            remove_replaced: false,
        }
    }
}

fn default_web_root() -> String {
    "./wwwroot".to_string()
}

fn default_container() -> String {
    "products".to_string()
}
