//! Category entity model.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use sqlx::FromRow;
use validator::Validate;

use crate::entity::Entity;
use crate::product::Product;

/// A product category. Names are unique.
#[derive(Debug, Clone, PartialEq, Deserialize, FromRow, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique category identifier.
    #[serde(default)]
    pub id: i32,
    /// Category name.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Products in this category, present only when a read includes them.
    #[sqlx(skip)]
    #[serde(default, skip_deserializing)]
    pub products: Option<Vec<Product>>,
}

impl Category {
    /// Build an unsaved category.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            products: None,
        }
    }

    /// Attach the products that reference this category.
    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = Some(products);
        self
    }

    /// Number of included products (0 when they were not loaded).
    pub fn products_count(&self) -> usize {
        self.products.as_ref().map_or(0, Vec::len)
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Category", 4)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("products", &self.products)?;
        state.serialize_field("productsCount", &self.products_count())?;
        state.end()
    }
}

impl Entity for Category {
    const KIND: &'static str = "category";

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
