//! In-memory company table.

use std::collections::BTreeMap;

use smartstock_entity::Company;

use super::Tables;
use super::table::MemoryTable;

impl MemoryTable for Company {
    fn rows(tables: &Tables) -> &BTreeMap<i32, Self> {
        &tables.companies
    }

    fn rows_mut(tables: &mut Tables) -> &mut BTreeMap<i32, Self> {
        &mut tables.companies
    }
}
