use std::collections::HashSet;

use confereai_core::{DomainError, DomainResult};

use crate::item::{InventoryRecord, SeedItem};
use crate::search::linear_find;

/// Fixed catalog of inventory records.
///
/// Records are created once from seed data; afterwards only stock levels change,
/// and only through [`InventoryStore::adjust_stock`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryStore {
    records: Vec<InventoryRecord>,
}

impl InventoryStore {
    /// Build the store from seed entries, keeping their order.
    ///
    /// Fails on blank codes/names and on duplicate codes.
    pub fn from_seed(seed: impl IntoIterator<Item = SeedItem>) -> DomainResult<Self> {
        let mut seen = HashSet::new();
        let mut records = Vec::new();

        for item in seed {
            let record = InventoryRecord::try_from(item)?;
            if !seen.insert(record.code().clone()) {
                return Err(DomainError::DuplicateCode(record.code().clone()));
            }
            records.push(record);
        }

        Ok(Self { records })
    }

    /// Exact-match lookup by code (linear scan, no ordering assumption).
    pub fn find_by_code(&self, code: &str) -> Option<&InventoryRecord> {
        linear_find(&self.records, code)
    }

    /// Apply `stock_level += delta` to the record with `code` and return the new level.
    ///
    /// No lower bound is enforced.
    pub fn adjust_stock(&mut self, code: &str, delta: i64) -> DomainResult<i64> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.code().as_str() == code)
            .ok_or_else(DomainError::not_found)?;
        record.apply_delta(delta)
    }

    /// Live view of all records, in seed order.
    pub fn records(&self) -> &[InventoryRecord] {
        &self.records
    }

    /// Owned copy of the current records.
    pub fn snapshot(&self) -> Vec<InventoryRecord> {
        self.records.clone()
    }

    pub fn total_stock(&self) -> i64 {
        self.records.iter().map(InventoryRecord::stock_level).sum()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
