//! In-memory product table.

use std::collections::BTreeMap;

use async_trait::async_trait;

use smartstock_core::traits::Store;
use smartstock_core::types::{ActionCode, ActionResult};
use smartstock_entity::Product;

use super::Tables;
use super::table::{MemoryStore, MemoryTable};
use crate::stores::ProductStore;

impl MemoryTable for Product {
    fn rows(tables: &Tables) -> &BTreeMap<i32, Self> {
        &tables.products
    }

    fn rows_mut(tables: &mut Tables) -> &mut BTreeMap<i32, Self> {
        &mut tables.products
    }

    fn check_references(&self, tables: &Tables) -> Result<(), ActionCode> {
        if tables.categories.contains_key(&self.category_id) {
            Ok(())
        } else {
            Err(ActionCode::CategoryNotFound)
        }
    }

    fn check(&self, tables: &Tables) -> Result<(), &'static str> {
        if self.unit_price.is_sign_negative() && !self.unit_price.is_zero() {
            return Err("products_unit_price_check");
        }
        let taken = tables.products.values().any(|other| {
            other.id != self.id && other.category_id == self.category_id && other.code == self.code
        });
        if taken {
            return Err("products_category_id_code_key");
        }
        Ok(())
    }

    fn detach(mut self) -> Self {
        self.category = None;
        self
    }

    fn include(self, tables: &Tables) -> Self {
        match tables.categories.get(&self.category_id) {
            Some(category) => self.with_category(category.clone()),
            None => self,
        }
    }
}

#[async_trait]
impl ProductStore for MemoryStore<Product> {
    fn as_store(&self) -> &dyn Store<Product> {
        self
    }

    async fn get_by_category_combo(&self, category_id: i32) -> ActionResult<Vec<Product>> {
        ActionResult::ok(
            self.ordered_where(|p| p.category_id == category_id)
                .await,
        )
    }
}
