//! Entity-specific store extensions and the engine-selected store bundle.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use smartstock_core::config::{DatabaseConfig, DatabaseProvider};
use smartstock_core::result::AppResult;
use smartstock_core::traits::Store;
use smartstock_core::types::ActionResult;
use smartstock_entity::{Category, Company, Product};

use crate::connection::DatabasePool;
use crate::memory::MemoryDatabase;
use crate::migration::run_migrations;
use crate::postgres::{PgCategoryStore, PgProductStore, PgStore};

/// Category queries beyond the generic contract.
#[async_trait]
pub trait CategoryStore: Store<Category> {
    /// View as the generic store.
    fn as_store(&self) -> &dyn Store<Category>;

    /// Every category ordered by name, without products.
    async fn get_combo(&self) -> ActionResult<Vec<Category>>;
}

/// Product queries beyond the generic contract.
#[async_trait]
pub trait ProductStore: Store<Product> {
    /// View as the generic store.
    fn as_store(&self) -> &dyn Store<Product>;

    /// Products of one category ordered by name, without the category.
    async fn get_by_category_combo(&self, category_id: i32) -> ActionResult<Vec<Product>>;
}

#[derive(Debug, Clone)]
enum Engine {
    Postgres(DatabasePool),
    Memory,
}

/// The stores of one engine, shared across request handlers.
#[derive(Clone)]
pub struct Stores {
    /// Category store.
    pub categories: Arc<dyn CategoryStore>,
    /// Product store.
    pub products: Arc<dyn ProductStore>,
    /// Company store.
    pub companies: Arc<dyn Store<Company>>,
    engine: Engine,
}

impl Stores {
    /// Build the stores of the configured engine. For PostgreSQL this
    /// connects the pool and, when enabled, applies pending migrations.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            DatabaseProvider::Postgres => {
                info!("Initializing PostgreSQL stores");
                let pool = DatabasePool::connect(config).await?;
                if config.run_migrations {
                    run_migrations(pool.pool()).await?;
                }
                Ok(Self::postgres(pool))
            }
            DatabaseProvider::Memory => {
                info!("Initializing in-memory stores");
                Ok(Self::memory(MemoryDatabase::new()))
            }
        }
    }

    /// Stores on an open PostgreSQL pool.
    pub fn postgres(pool: DatabasePool) -> Self {
        let pg = pool.pool().clone();
        Self {
            categories: Arc::new(PgCategoryStore::new(pg.clone())),
            products: Arc::new(PgProductStore::new(pg.clone())),
            companies: Arc::new(PgStore::<Company>::new(pg)),
            engine: Engine::Postgres(pool),
        }
    }

    /// Stores on an in-memory database.
    pub fn memory(db: MemoryDatabase) -> Self {
        Self {
            categories: Arc::new(db.store::<Category>()),
            products: Arc::new(db.store::<Product>()),
            companies: Arc::new(db.store::<Company>()),
            engine: Engine::Memory,
        }
    }

    /// Engine name for logs and health output.
    pub fn provider_name(&self) -> &'static str {
        match self.engine {
            Engine::Postgres(_) => "postgres",
            Engine::Memory => "memory",
        }
    }

    /// Check that the engine is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.engine {
            Engine::Postgres(pool) => pool.health_check().await,
            Engine::Memory => Ok(true),
        }
    }

    /// Release engine resources.
    pub async fn close(&self) {
        if let Engine::Postgres(pool) = &self.engine {
            pool.close().await;
        }
    }
}

impl fmt::Debug for Stores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stores")
            .field("engine", &self.engine)
            .finish_non_exhaustive()
    }
}
