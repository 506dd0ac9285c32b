//! In-memory category table.

use std::collections::BTreeMap;

use async_trait::async_trait;

use smartstock_core::traits::Store;
use smartstock_core::types::ActionResult;
use smartstock_entity::{Category, Product};

use super::Tables;
use super::table::{MemoryStore, MemoryTable, by_name};
use crate::stores::CategoryStore;

impl MemoryTable for Category {
    fn rows(tables: &Tables) -> &BTreeMap<i32, Self> {
        &tables.categories
    }

    fn rows_mut(tables: &mut Tables) -> &mut BTreeMap<i32, Self> {
        &mut tables.categories
    }

    fn check(&self, tables: &Tables) -> Result<(), &'static str> {
        let taken = tables
            .categories
            .values()
            .any(|other| other.id != self.id && other.name == self.name);
        if taken {
            return Err("categories_name_key");
        }
        Ok(())
    }

    fn check_delete(id: i32, tables: &Tables) -> Result<(), &'static str> {
        if tables.products.values().any(|p| p.category_id == id) {
            return Err("products_category_id_fkey");
        }
        Ok(())
    }

    fn detach(mut self) -> Self {
        self.products = None;
        self
    }

    fn include(self, tables: &Tables) -> Self {
        let mut products: Vec<Product> = tables
            .products
            .values()
            .filter(|p| p.category_id == self.id)
            .cloned()
            .collect();
        products.sort_by(|a, b| by_name(&a.name, a.id, &b.name, b.id));
        self.with_products(products)
    }
}

#[async_trait]
impl CategoryStore for MemoryStore<Category> {
    fn as_store(&self) -> &dyn Store<Category> {
        self
    }

    async fn get_combo(&self) -> ActionResult<Vec<Category>> {
        ActionResult::ok(self.ordered_where(|_| true).await)
    }
}
