//! Product entity model.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use crate::category::Category;
use crate::entity::Entity;

/// Placeholder served for products without an uploaded image.
pub const NO_IMAGE_PATH: &str = "/images/NoImage.png";

/// A stocked product. `(category_id, code)` is unique.
#[derive(Debug, Clone, PartialEq, Deserialize, FromRow, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    #[serde(default)]
    pub id: i32,
    /// Product code, unique within its category.
    #[validate(length(min = 1, max = 100))]
    pub code: String,
    /// Product name.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Price per unit.
    #[validate(custom(function = "non_negative"))]
    pub unit_price: Decimal,
    /// Units on hand.
    pub current_stock: i32,
    /// Restock threshold.
    pub minimum_stock: i32,
    /// Optional expiry date.
    #[serde(default, deserialize_with = "crate::serde_date::deserialize")]
    pub expiration_date: Option<NaiveDate>,
    /// When the product was registered.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// Root-relative path of the stored image.
    #[serde(default)]
    pub image: Option<String>,
    /// Owning category.
    #[validate(range(min = 1))]
    pub category_id: i32,
    /// Owning category, present only when a read includes it.
    #[sqlx(skip)]
    #[serde(default, skip_deserializing)]
    pub category: Option<Box<Category>>,
}

impl Product {
    /// The image path to display: the stored image or the placeholder.
    pub fn image_full(&self) -> &str {
        match self.image.as_deref() {
            Some(path) if !path.is_empty() => path,
            _ => NO_IMAGE_PATH,
        }
    }

    /// Attach the owning category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(Box::new(category));
        self
    }
}

impl Serialize for Product {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Product", 12)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("code", &self.code)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("unitPrice", &self.unit_price)?;
        state.serialize_field("currentStock", &self.current_stock)?;
        state.serialize_field("minimumStock", &self.minimum_stock)?;
        state.serialize_field("expirationDate", &self.expiration_date)?;
        state.serialize_field("createdAt", &self.created_at)?;
        state.serialize_field("image", &self.image)?;
        state.serialize_field("imageFull", self.image_full())?;
        state.serialize_field("categoryId", &self.category_id)?;
        state.serialize_field("category", &self.category)?;
        state.end()
    }
}

impl Entity for Product {
    const KIND: &'static str = "product";

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

pub(crate) fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        let mut err = ValidationError::new("range");
        err.message = Some("must not be negative".into());
        return Err(err);
    }
    Ok(())
}
