//! Category table and store.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;

use smartstock_core::traits::Store;
use smartstock_core::types::{ActionCode, ActionResult, Pagination};
use smartstock_entity::{Category, Entity, Product};

use super::table::{PgQuery, PgStore, PgTable};
use crate::outcome;
use crate::stores::CategoryStore;

impl PgTable for Category {
    const TABLE: &'static str = "categories";
    const INSERT: &'static str = "INSERT INTO categories (name) VALUES ($1) RETURNING *";
    const UPDATE: &'static str = "UPDATE categories SET name = $2 WHERE id = $1 RETURNING *";

    fn bind_columns<'q>(&'q self, query: PgQuery<'q, Self>) -> PgQuery<'q, Self> {
        query.bind(&self.name)
    }
}

/// Category store. Listings and single reads include each category's
/// products so `productsCount` is populated.
#[derive(Debug, Clone)]
pub struct PgCategoryStore {
    categories: PgStore<Category>,
}

impl PgCategoryStore {
    /// Create a new category store.
    pub fn new(pool: PgPool) -> Self {
        Self {
            categories: PgStore::new(pool),
        }
    }

    async fn include_products(&self, categories: Vec<Category>) -> Result<Vec<Category>, sqlx::Error> {
        if categories.is_empty() {
            return Ok(categories);
        }
        let ids: Vec<i32> = categories.iter().map(|c| c.id).collect();
        let products = sqlx::query_as::<_, Product>(
            "SELECT * FROM products WHERE category_id = ANY($1) ORDER BY lower(name), name, id",
        )
        .bind(&ids)
        .fetch_all(self.categories.pool())
        .await?;

        let mut by_category: HashMap<i32, Vec<Product>> = HashMap::new();
        for product in products {
            by_category.entry(product.category_id).or_default().push(product);
        }
        Ok(categories
            .into_iter()
            .map(|category| {
                let products = by_category.remove(&category.id).unwrap_or_default();
                category.with_products(products)
            })
            .collect())
    }
}

#[async_trait]
impl Store<Category> for PgCategoryStore {
    async fn get_all(&self) -> ActionResult<Vec<Category>> {
        let result = match self.categories.fetch_ordered().await {
            Ok(rows) => self.include_products(rows).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(rows) => ActionResult::ok(rows),
            Err(e) => outcome::from_sqlx(e, Category::KIND, "get_all"),
        }
    }

    async fn get_by_id(&self, id: i32) -> ActionResult<Category> {
        let row = match self.categories.fetch_by_id(id).await {
            Ok(Some(row)) => row,
            Ok(None) => return ActionResult::failure(ActionCode::NotFound),
            Err(e) => return outcome::from_sqlx(e, Category::KIND, "get_by_id"),
        };
        match self.include_products(vec![row]).await {
            Ok(mut rows) => match rows.pop() {
                Some(row) => ActionResult::ok(row),
                None => ActionResult::failure(ActionCode::NotFound),
            },
            Err(e) => outcome::from_sqlx(e, Category::KIND, "get_by_id"),
        }
    }

    async fn add(&self, entity: Category) -> ActionResult<Category> {
        self.categories.add(entity).await
    }

    async fn update(&self, entity: Category) -> ActionResult<Category> {
        self.categories.update(entity).await
    }

    async fn delete(&self, id: i32) -> ActionResult<()> {
        self.categories.delete(id).await
    }

    async fn get_page(&self, pagination: &Pagination) -> ActionResult<Vec<Category>> {
        let result = match self.categories.fetch_page(pagination).await {
            Ok(rows) => self.include_products(rows).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(rows) => ActionResult::ok(rows),
            Err(e) => outcome::from_sqlx(e, Category::KIND, "get_page"),
        }
    }

    async fn get_total_count(&self, pagination: &Pagination) -> ActionResult<u64> {
        self.categories.get_total_count(pagination).await
    }
}

#[async_trait]
impl CategoryStore for PgCategoryStore {
    fn as_store(&self) -> &dyn Store<Category> {
        self
    }

    async fn get_combo(&self) -> ActionResult<Vec<Category>> {
        self.categories.get_all().await
    }
}
