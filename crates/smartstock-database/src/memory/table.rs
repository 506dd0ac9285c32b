//! Generic in-memory store over one table.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::marker::PhantomData;

use async_trait::async_trait;
use tracing::{debug, warn};

use smartstock_core::traits::Store;
use smartstock_core::types::{ActionCode, ActionResult, Pagination};
use smartstock_entity::Entity;

use super::{MemoryDatabase, Tables};

/// Table mapping for an entity kept in [`MemoryDatabase`].
pub trait MemoryTable: Entity {
    /// Rows of this kind.
    fn rows(tables: &Tables) -> &BTreeMap<i32, Self>;

    /// Mutable rows of this kind.
    fn rows_mut(tables: &mut Tables) -> &mut BTreeMap<i32, Self>;

    /// Check the rows this one refers to, returning the failure to report
    /// when one is missing. Runs before any other write rule.
    fn check_references(&self, _tables: &Tables) -> Result<(), ActionCode> {
        Ok(())
    }

    /// Check the row against the schema rules, returning the name of the
    /// violated constraint. The row's own id is excluded from uniqueness.
    fn check(&self, _tables: &Tables) -> Result<(), &'static str> {
        Ok(())
    }

    /// Check whether the row with `id` may be removed, returning the name of
    /// the restricting constraint.
    fn check_delete(_id: i32, _tables: &Tables) -> Result<(), &'static str> {
        Ok(())
    }

    /// Drop relations that are never persisted.
    fn detach(self) -> Self {
        self
    }

    /// Attach the relations a full read includes.
    fn include(self, _tables: &Tables) -> Self {
        self
    }
}

/// [`Store`] implementation shared by every in-memory table.
#[derive(Debug)]
pub struct MemoryStore<E> {
    db: MemoryDatabase,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for MemoryStore<E> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: MemoryTable> MemoryStore<E> {
    /// Create a store over `db`.
    pub fn new(db: MemoryDatabase) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Rows passing `keep`, ordered by display name then id, without
    /// included relations.
    pub(crate) async fn ordered_where(&self, keep: impl Fn(&E) -> bool) -> Vec<E> {
        let tables = self.db.tables().read().await;
        ordered_in(&tables, keep)
    }
}

/// Rows of `tables` passing `keep`, in display-name order.
fn ordered_in<E: MemoryTable>(tables: &Tables, keep: impl Fn(&E) -> bool) -> Vec<E> {
    let mut rows: Vec<E> = E::rows(tables).values().filter(|row| keep(row)).cloned().collect();
    rows.sort_by(|a, b| by_name(a.display_name(), a.id(), b.display_name(), b.id()));
    rows
}

/// Case-insensitive name order; the raw name and then the id break ties.
pub(crate) fn by_name(a: &str, a_id: i32, b: &str, b_id: i32) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
        .then_with(|| a_id.cmp(&b_id))
}

fn to_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

fn referenced<T>(kind: &'static str, operation: &'static str, code: ActionCode) -> ActionResult<T> {
    warn!(kind, operation, %code, "Write rejected by missing reference");
    ActionResult::failure(code)
}

fn rejected<T>(kind: &'static str, operation: &'static str, constraint: &'static str) -> ActionResult<T> {
    warn!(kind, operation, constraint, "Write rejected by constraint");
    ActionResult::failure(ActionCode::ConstraintViolation)
}

#[async_trait]
impl<E: MemoryTable> Store<E> for MemoryStore<E> {
    async fn get_all(&self) -> ActionResult<Vec<E>> {
        let tables = self.db.tables().read().await;
        let rows = ordered_in::<E>(&tables, |_| true);
        ActionResult::ok(rows.into_iter().map(|row| row.include(&tables)).collect())
    }

    async fn get_by_id(&self, id: i32) -> ActionResult<E> {
        let tables = self.db.tables().read().await;
        match E::rows(&tables).get(&id) {
            Some(row) => ActionResult::ok(row.clone().include(&tables)),
            None => ActionResult::failure(ActionCode::NotFound),
        }
    }

    async fn add(&self, entity: E) -> ActionResult<E> {
        let mut tables = self.db.tables().write().await;
        let mut row = entity.detach();
        row.set_id(0);
        if let Err(code) = row.check_references(&tables) {
            return referenced(E::KIND, "add", code);
        }
        if let Err(constraint) = row.check(&tables) {
            return rejected(E::KIND, "add", constraint);
        }
        let id = tables.next_id(E::KIND);
        row.set_id(id);
        E::rows_mut(&mut tables).insert(id, row.clone());
        debug!(kind = E::KIND, id, "Row inserted");
        ActionResult::ok(row)
    }

    async fn update(&self, entity: E) -> ActionResult<E> {
        let mut tables = self.db.tables().write().await;
        let row = entity.detach();
        let id = row.id();
        if let Err(code) = row.check_references(&tables) {
            return referenced(E::KIND, "update", code);
        }
        if !E::rows(&tables).contains_key(&id) {
            return ActionResult::failure(ActionCode::NotFound);
        }
        if let Err(constraint) = row.check(&tables) {
            return rejected(E::KIND, "update", constraint);
        }
        E::rows_mut(&mut tables).insert(id, row.clone());
        debug!(kind = E::KIND, id, "Row updated");
        ActionResult::ok(row)
    }

    async fn delete(&self, id: i32) -> ActionResult<()> {
        let mut tables = self.db.tables().write().await;
        if !E::rows(&tables).contains_key(&id) {
            return ActionResult::failure(ActionCode::NotFound);
        }
        if let Err(constraint) = E::check_delete(id, &tables) {
            warn!(kind = E::KIND, id, constraint, "Delete failed");
            return ActionResult::failure(ActionCode::DeleteFailed);
        }
        E::rows_mut(&mut tables).remove(&id);
        debug!(kind = E::KIND, id, "Row deleted");
        ActionResult::done()
    }

    async fn get_page(&self, pagination: &Pagination) -> ActionResult<Vec<E>> {
        let tables = self.db.tables().read().await;
        let rows = ordered_in::<E>(&tables, |row| pagination.matches(row.display_name()));
        ActionResult::ok(
            rows.into_iter()
                .skip(to_usize(pagination.offset()))
                .take(to_usize(pagination.limit()))
                .map(|row| row.include(&tables))
                .collect(),
        )
    }

    async fn get_total_count(&self, pagination: &Pagination) -> ActionResult<u64> {
        let tables = self.db.tables().read().await;
        let count = E::rows(&tables)
            .values()
            .filter(|row| pagination.matches(row.display_name()))
            .count();
        ActionResult::ok(u64::try_from(count).unwrap_or(u64::MAX))
    }
}
