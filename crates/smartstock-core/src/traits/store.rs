//! Generic data store trait.

use async_trait::async_trait;

use crate::types::{ActionResult, Pagination};

/// CRUD, paging and counting over one entity kind keyed by an integer id.
///
/// Every operation reports its outcome through [`ActionResult`]; storage
/// engine errors are classified inside the implementation and never escape
/// as `Err`. Entity-specific queries live on extension traits next to the
/// concrete stores.
#[async_trait]
pub trait Store<E>: Send + Sync + 'static
where
    E: Send + Sync + 'static,
{
    /// Every row, in the store's listing order.
    async fn get_all(&self) -> ActionResult<Vec<E>>;

    /// The row with `id`, or `NOT_FOUND`.
    async fn get_by_id(&self, id: i32) -> ActionResult<E>;

    /// Insert a new row. The store assigns the id; the stored row is returned.
    async fn add(&self, entity: E) -> ActionResult<E>;

    /// Replace the row whose id matches `entity`.
    async fn update(&self, entity: E) -> ActionResult<E>;

    /// Remove the row with `id`.
    async fn delete(&self, id: i32) -> ActionResult<()>;

    /// One window of the filtered listing, ordered by display name.
    async fn get_page(&self, pagination: &Pagination) -> ActionResult<Vec<E>>;

    /// Number of rows passing the filter, ignoring the window.
    async fn get_total_count(&self, pagination: &Pagination) -> ActionResult<u64>;
}
