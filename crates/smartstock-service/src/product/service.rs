//! Product writes from the form input shape, including image upload.

use std::sync::Arc;

use tracing::{info, warn};

use smartstock_core::config::storage::ImageStorageConfig;
use smartstock_core::traits::Store;
use smartstock_core::traits::storage::FileStorage;
use smartstock_core::types::{ActionCode, ActionResult};
use smartstock_database::{CategoryStore, ProductStore, Stores};
use smartstock_entity::{Product, ProductInput};
use smartstock_storage::decode_image;

/// Creates and updates products from [`ProductInput`], storing uploaded
/// images through [`FileStorage`].
#[derive(Clone)]
pub struct ProductService {
    /// Category store, for referential checks.
    categories: Arc<dyn CategoryStore>,
    /// Product store.
    products: Arc<dyn ProductStore>,
    /// Image storage.
    images: Arc<dyn FileStorage>,
    /// Image settings.
    config: ImageStorageConfig,
}

impl std::fmt::Debug for ProductService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductService")
            .field("container", &self.config.container)
            .finish()
    }
}

impl ProductService {
    /// Creates a new product service.
    pub fn new(stores: &Stores, images: Arc<dyn FileStorage>, config: ImageStorageConfig) -> Self {
        Self {
            categories: Arc::clone(&stores.categories),
            products: Arc::clone(&stores.products),
            images,
            config,
        }
    }

    /// Create a product. Fails with `CATEGORY_NOT_FOUND` when the category
    /// does not exist; a non-empty image payload is stored first and its
    /// path recorded on the product.
    pub async fn add_from_input(&self, input: ProductInput) -> ActionResult<Product> {
        if let Err(failure) = self.require_category(input.category_id).await {
            return failure;
        }

        let mut product = input.to_product();
        let stored = match self.store_image(&input).await {
            Ok(stored) => stored,
            Err(failure) => return failure,
        };
        product.image = stored.clone();

        let result = self.products.add(product).await;
        if result.was_success {
            if let Some(created) = &result.result {
                info!(product_id = created.id, code = %created.code, "Product created");
            }
        } else if let Some(path) = stored {
            self.discard(&path).await;
        }
        result
    }

    /// Replace a product's fields from the input. Fails with
    /// `PRODUCT_NOT_FOUND` or `CATEGORY_NOT_FOUND` when either is missing.
    /// Without an image payload the stored image path is kept.
    pub async fn update_from_input(&self, input: ProductInput) -> ActionResult<Product> {
        let mut product = match self.products.get_by_id(input.id).await.into_result() {
            Ok(Some(product)) => product,
            Ok(None) | Err((ActionCode::NotFound, _)) => {
                return ActionResult::failure(ActionCode::ProductNotFound);
            }
            Err((_, message)) => return ActionResult::unexpected(message),
        };
        if let Err(failure) = self.require_category(input.category_id).await {
            return failure;
        }

        input.apply_to(&mut product);
        let stored = match self.store_image(&input).await {
            Ok(stored) => stored,
            Err(failure) => return failure,
        };
        let replaced = match &stored {
            Some(path) => product.image.replace(path.clone()),
            None => None,
        };

        let result = self.products.update(product).await;
        if result.was_success {
            info!(product_id = input.id, "Product updated");
            if self.config.remove_replaced {
                if let Some(old) = replaced {
                    self.discard(&old).await;
                }
            }
        } else if let Some(path) = stored {
            self.discard(&path).await;
        }
        result
    }

    async fn require_category(&self, category_id: i32) -> Result<(), ActionResult<Product>> {
        match self.categories.get_by_id(category_id).await.into_result() {
            Ok(Some(_)) => Ok(()),
            Ok(None) | Err((ActionCode::NotFound, _)) => {
                Err(ActionResult::failure(ActionCode::CategoryNotFound))
            }
            Err((_, message)) => Err(ActionResult::unexpected(message)),
        }
    }

    /// Decode and store the input's image, returning its public path.
    async fn store_image(&self, input: &ProductInput) -> Result<Option<String>, ActionResult<Product>> {
        let Some(payload) = input.image_payload() else {
            return Ok(None);
        };
        let decoded = decode_image(payload).map_err(|e| {
            warn!(error = %e, "Rejected product image");
            ActionResult::unexpected(e.message.clone())
        })?;
        self.images
            .save(decoded.content, decoded.extension, &self.config.container)
            .await
            .map(Some)
            .map_err(|e| {
                warn!(error = %e, "Failed to store product image");
                ActionResult::unexpected(e.message.clone())
            })
    }

    async fn discard(&self, path: &str) {
        if let Err(e) = self.images.remove(path, &self.config.container).await {
            warn!(path, error = %e, "Failed to remove product image");
        }
    }
}
