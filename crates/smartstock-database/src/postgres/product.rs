//! Product table and store.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::warn;

use smartstock_core::traits::Store;
use smartstock_core::types::{ActionCode, ActionResult, Pagination};
use smartstock_entity::{Category, Entity, Product};

use super::table::{PgQuery, PgStore, PgTable};
use crate::outcome;
use crate::stores::ProductStore;

impl PgTable for Product {
    const TABLE: &'static str = "products";
    const INSERT: &'static str = "INSERT INTO products \
        (code, name, unit_price, current_stock, minimum_stock, expiration_date, created_at, image, category_id) \
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *";
    const UPDATE: &'static str = "UPDATE products SET \
        code = $2, name = $3, unit_price = $4, current_stock = $5, minimum_stock = $6, \
        expiration_date = $7, created_at = $8, image = $9, category_id = $10 \
        WHERE id = $1 RETURNING *";

    fn bind_columns<'q>(&'q self, query: PgQuery<'q, Self>) -> PgQuery<'q, Self> {
        query
            .bind(&self.code)
            .bind(&self.name)
            .bind(self.unit_price)
            .bind(self.current_stock)
            .bind(self.minimum_stock)
            .bind(self.expiration_date)
            .bind(self.created_at)
            .bind(&self.image)
            .bind(self.category_id)
    }
}

/// Product store. Listings and single reads include the owning category.
#[derive(Debug, Clone)]
pub struct PgProductStore {
    products: PgStore<Product>,
}

impl PgProductStore {
    /// Create a new product store.
    pub fn new(pool: PgPool) -> Self {
        Self {
            products: PgStore::new(pool),
        }
    }

    async fn include_category(&self, products: Vec<Product>) -> Result<Vec<Product>, sqlx::Error> {
        if products.is_empty() {
            return Ok(products);
        }
        let mut ids: Vec<i32> = products.iter().map(|p| p.category_id).collect();
        ids.sort_unstable();
        ids.dedup();
        let categories: HashMap<i32, Category> =
            sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = ANY($1)")
                .bind(&ids)
                .fetch_all(self.products.pool())
                .await?
                .into_iter()
                .map(|c| (c.id, c))
                .collect();

        Ok(products
            .into_iter()
            .map(|product| match categories.get(&product.category_id) {
                Some(category) => product.with_category(category.clone()),
                None => product,
            })
            .collect())
    }

    async fn category_exists(&self, id: i32) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
            .bind(id)
            .fetch_one(self.products.pool())
            .await
    }

    /// Fails with `CATEGORY_NOT_FOUND` unless the referenced category exists.
    async fn check_category(&self, entity: &Product, operation: &'static str) -> Option<ActionResult<Product>> {
        match self.category_exists(entity.category_id).await {
            Ok(true) => None,
            Ok(false) => {
                warn!(kind = Product::KIND, operation, category_id = entity.category_id, "Category not found");
                Some(ActionResult::failure(ActionCode::CategoryNotFound))
            }
            Err(e) => Some(outcome::from_sqlx(e, Product::KIND, operation)),
        }
    }
}

#[async_trait]
impl Store<Product> for PgProductStore {
    async fn get_all(&self) -> ActionResult<Vec<Product>> {
        let result = match self.products.fetch_ordered().await {
            Ok(rows) => self.include_category(rows).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(rows) => ActionResult::ok(rows),
            Err(e) => outcome::from_sqlx(e, Product::KIND, "get_all"),
        }
    }

    async fn get_by_id(&self, id: i32) -> ActionResult<Product> {
        let row = match self.products.fetch_by_id(id).await {
            Ok(Some(row)) => row,
            Ok(None) => return ActionResult::failure(ActionCode::NotFound),
            Err(e) => return outcome::from_sqlx(e, Product::KIND, "get_by_id"),
        };
        match self.include_category(vec![row]).await {
            Ok(mut rows) => match rows.pop() {
                Some(row) => ActionResult::ok(row),
                None => ActionResult::failure(ActionCode::NotFound),
            },
            Err(e) => outcome::from_sqlx(e, Product::KIND, "get_by_id"),
        }
    }

    async fn add(&self, entity: Product) -> ActionResult<Product> {
        if let Some(failed) = self.check_category(&entity, "add").await {
            return failed;
        }
        self.products.add(entity).await
    }

    async fn update(&self, entity: Product) -> ActionResult<Product> {
        if let Some(failed) = self.check_category(&entity, "update").await {
            return failed;
        }
        self.products.update(entity).await
    }

    async fn delete(&self, id: i32) -> ActionResult<()> {
        self.products.delete(id).await
    }

    async fn get_page(&self, pagination: &Pagination) -> ActionResult<Vec<Product>> {
        let result = match self.products.fetch_page(pagination).await {
            Ok(rows) => self.include_category(rows).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(rows) => ActionResult::ok(rows),
            Err(e) => outcome::from_sqlx(e, Product::KIND, "get_page"),
        }
    }

    async fn get_total_count(&self, pagination: &Pagination) -> ActionResult<u64> {
        self.products.get_total_count(pagination).await
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    fn as_store(&self) -> &dyn Store<Product> {
        self
    }

    async fn get_by_category_combo(&self, category_id: i32) -> ActionResult<Vec<Product>> {
        let result = sqlx::query_as::<_, Product>(
            "SELECT * FROM products WHERE category_id = $1 ORDER BY lower(name), name, id",
        )
        .bind(category_id)
        .fetch_all(self.products.pool())
        .await;
        match result {
            Ok(rows) => ActionResult::ok(rows),
            Err(e) => outcome::from_sqlx(e, Product::KIND, "get_by_category_combo"),
        }
    }
}
