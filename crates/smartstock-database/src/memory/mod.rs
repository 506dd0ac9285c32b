//! In-memory store engine.
//!
//! Rows live in ordered maps behind one async `RwLock`. Writes check the
//! same rules the PostgreSQL schema enforces: unique category names,
//! unique `(category_id, code)` product pairs, non-negative prices, existing
//! categories for products, and restricted deletes for categories still in
//! use. Ids come from per-table sequences and are never reused.

pub mod category;
pub mod company;
pub mod product;
pub mod table;

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tokio::sync::RwLock;

use smartstock_entity::{Category, Company, Product};

pub use table::{MemoryStore, MemoryTable};

/// Row storage for every entity kind.
#[derive(Debug, Default)]
pub struct Tables {
    pub(crate) categories: BTreeMap<i32, Category>,
    pub(crate) products: BTreeMap<i32, Product>,
    pub(crate) companies: BTreeMap<i32, Company>,
    sequences: HashMap<&'static str, i32>,
}

impl Tables {
    fn next_id(&mut self, kind: &'static str) -> i32 {
        let seq = self.sequences.entry(kind).or_insert(0);
        *seq += 1;
        *seq
    }
}

/// Shared handle to the in-memory tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryDatabase {
    /// Create an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn tables(&self) -> &RwLock<Tables> {
        &self.tables
    }

    /// Store over one entity kind.
    pub fn store<E: MemoryTable>(&self) -> MemoryStore<E> {
        MemoryStore::new(self.clone())
    }
}
