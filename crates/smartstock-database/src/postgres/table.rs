//! Generic PostgreSQL store over one table.

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, PgPool, Postgres};
use tracing::debug;

use smartstock_core::traits::Store;
use smartstock_core::types::{ActionCode, ActionResult, Pagination};
use smartstock_entity::Entity;

use crate::outcome;

/// A prepared query returning rows of `E`.
pub type PgQuery<'q, E> = QueryAs<'q, Postgres, E, PgArguments>;

/// Table mapping for an entity stored in PostgreSQL.
///
/// Every table has an `id SERIAL` key and a `name` column used as the
/// display name for filtering and ordering.
pub trait PgTable: Entity + for<'r> FromRow<'r, PgRow> + Unpin {
    /// Table name.
    const TABLE: &'static str;
    /// Insert statement binding the writable columns as `$1..$n`,
    /// ending in `RETURNING *`.
    const INSERT: &'static str;
    /// Update statement with the id as `$1` and the writable columns as
    /// `$2..$n+1`, ending in `RETURNING *`.
    const UPDATE: &'static str;

    /// Bind the writable columns in statement order.
    fn bind_columns<'q>(&'q self, query: PgQuery<'q, Self>) -> PgQuery<'q, Self>;
}

/// [`Store`] implementation shared by every table.
#[derive(Debug)]
pub struct PgStore<E> {
    pool: PgPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for PgStore<E> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: PgTable> PgStore<E> {
    /// Create a new store on `pool`.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    /// The pool this store runs on.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Every row ordered by name, as a raw sqlx result.
    pub(crate) async fn fetch_ordered(&self) -> Result<Vec<E>, sqlx::Error> {
        let sql = format!("SELECT * FROM {} ORDER BY lower(name), name, id", E::TABLE);
        sqlx::query_as::<_, E>(&sql).fetch_all(&self.pool).await
    }

    pub(crate) async fn fetch_by_id(&self, id: i32) -> Result<Option<E>, sqlx::Error> {
        let sql = format!("SELECT * FROM {} WHERE id = $1", E::TABLE);
        sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub(crate) async fn fetch_page(&self, pagination: &Pagination) -> Result<Vec<E>, sqlx::Error> {
        let sql = format!(
            "SELECT * FROM {} WHERE {FILTER} ORDER BY lower(name), name, id LIMIT $2 OFFSET $3",
            E::TABLE
        );
        sqlx::query_as::<_, E>(&sql)
            .bind(pagination.filter())
            .bind(to_i64(pagination.limit()))
            .bind(to_i64(pagination.offset()))
            .fetch_all(&self.pool)
            .await
    }
}

/// Case-insensitive substring match on `name`; a NULL filter matches all.
const FILTER: &str = "($1::text IS NULL OR STRPOS(LOWER(name), LOWER($1)) > 0)";

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[async_trait]
impl<E: PgTable> Store<E> for PgStore<E> {
    async fn get_all(&self) -> ActionResult<Vec<E>> {
        match self.fetch_ordered().await {
            Ok(rows) => ActionResult::ok(rows),
            Err(e) => outcome::from_sqlx(e, E::KIND, "get_all"),
        }
    }

    async fn get_by_id(&self, id: i32) -> ActionResult<E> {
        match self.fetch_by_id(id).await {
            Ok(Some(row)) => ActionResult::ok(row),
            Ok(None) => ActionResult::failure(ActionCode::NotFound),
            Err(e) => outcome::from_sqlx(e, E::KIND, "get_by_id"),
        }
    }

    async fn add(&self, entity: E) -> ActionResult<E> {
        let result = entity
            .bind_columns(sqlx::query_as::<_, E>(E::INSERT))
            .fetch_one(&self.pool)
            .await;
        match result {
            Ok(row) => {
                debug!(kind = E::KIND, id = row.id(), "Row inserted");
                ActionResult::ok(row)
            }
            Err(e) => outcome::from_sqlx(e, E::KIND, "add"),
        }
    }

    async fn update(&self, entity: E) -> ActionResult<E> {
        let result = entity
            .bind_columns(sqlx::query_as::<_, E>(E::UPDATE).bind(entity.id()))
            .fetch_optional(&self.pool)
            .await;
        match result {
            Ok(Some(row)) => {
                debug!(kind = E::KIND, id = row.id(), "Row updated");
                ActionResult::ok(row)
            }
            Ok(None) => ActionResult::failure(ActionCode::NotFound),
            Err(e) => outcome::from_sqlx(e, E::KIND, "update"),
        }
    }

    async fn delete(&self, id: i32) -> ActionResult<()> {
        let sql = format!("DELETE FROM {} WHERE id = $1", E::TABLE);
        match sqlx::query(&sql).bind(id).execute(&self.pool).await {
            Ok(done) if done.rows_affected() == 0 => ActionResult::failure(ActionCode::NotFound),
            Ok(_) => {
                debug!(kind = E::KIND, id, "Row deleted");
                ActionResult::done()
            }
            Err(e) => outcome::delete_failed(e, E::KIND, id),
        }
    }

    async fn get_page(&self, pagination: &Pagination) -> ActionResult<Vec<E>> {
        match self.fetch_page(pagination).await {
            Ok(rows) => ActionResult::ok(rows),
            Err(e) => outcome::from_sqlx(e, E::KIND, "get_page"),
        }
    }

    async fn get_total_count(&self, pagination: &Pagination) -> ActionResult<u64> {
        let sql = format!("SELECT COUNT(*) FROM {} WHERE {FILTER}", E::TABLE);
        let result = sqlx::query_scalar::<_, i64>(&sql)
            .bind(pagination.filter())
            .fetch_one(&self.pool)
            .await;
        match result {
            Ok(total) => ActionResult::ok(u64::try_from(total).unwrap_or_default()),
            Err(e) => outcome::from_sqlx(e, E::KIND, "get_total_count"),
        }
    }
}
