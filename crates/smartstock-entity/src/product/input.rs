//! Input shape for the image-aware product endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::model::{Product, non_negative};

/// Product fields as submitted by the create/edit form. `image` carries the
/// uploaded picture as base64, optionally as a `data:` URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    /// Target product id (ignored on create).
    #[serde(default)]
    pub id: i32,
    #[validate(length(min = 1, max = 100))]
    pub code: String,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(custom(function = "non_negative"))]
    pub unit_price: Decimal,
    pub current_stock: i32,
    pub minimum_stock: i32,
    #[serde(default, deserialize_with = "crate::serde_date::deserialize")]
    pub expiration_date: Option<NaiveDate>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// Base64-encoded image, absent or empty when unchanged.
    #[serde(default)]
    pub image: Option<String>,
    #[validate(range(min = 1))]
    pub category_id: i32,
}

impl ProductInput {
    /// The base64 payload, if one was sent.
    pub fn image_payload(&self) -> Option<&str> {
        self.image.as_deref().filter(|data| !data.trim().is_empty())
    }

    /// Build a new, unsaved product. The image path is left for the caller.
    pub fn to_product(&self) -> Product {
        let mut product = Product {
            id: 0,
            code: String::new(),
            name: String::new(),
            unit_price: Decimal::ZERO,
            current_stock: 0,
            minimum_stock: 0,
            expiration_date: None,
            created_at: self.created_at,
            image: None,
            category_id: 0,
            category: None,
        };
        self.apply_to(&mut product);
        product
    }

    /// Copy every mutable field except the image onto `product`.
    pub fn apply_to(&self, product: &mut Product) {
        product.code = self.code.clone();
        product.name = self.name.clone();
        product.unit_price = self.unit_price;
        product.current_stock = self.current_stock;
        product.minimum_stock = self.minimum_stock;
        product.expiration_date = self.expiration_date;
        product.created_at = self.created_at;
        product.category_id = self.category_id;
        product.category = None;
    }
}
