//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use smartstock_core::config::AppConfig;
use smartstock_database::Stores;
use smartstock_service::ProductService;
use smartstock_storage::ImageStorage;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Entity stores of the configured engine.
    pub stores: Stores,
    /// Image storage under the web root.
    pub images: Arc<ImageStorage>,
    /// Image-aware product writes.
    pub product_service: Arc<ProductService>,
    /// Process start, for uptime reporting.
    pub started_at: Instant,
}

impl AppState {
    /// Wire the state from its infrastructure parts.
    pub fn new(config: AppConfig, stores: Stores, images: ImageStorage) -> Self {
        let images = Arc::new(images);
        let product_service = Arc::new(ProductService::new(
            &stores,
            images.clone(),
            config.storage.images.clone(),
        ));
        Self {
            config: Arc::new(config),
            stores,
            images,
            product_service,
            started_at: Instant::now(),
        }
    }
}
