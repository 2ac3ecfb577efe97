//! Thread-safe inventory facade.
//!
//! Store and ledger sit behind one `RwLock`, so a consumption (stock mutation,
//! chronological append, consultation push) is a single critical section.
//! Searches and rankings take the read lock and may overlap each other, never a
//! consumption in progress.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use confereai_core::{DomainError, DomainResult};

use crate::consumption::{ConsumptionEntry, ConsumptionLedger};
use crate::item::{InventoryRecord, SeedItem};
use crate::ranking::{RankField, rank_by};
use crate::search::{binary_find, linear_find, sort_by_code};
use crate::store::InventoryStore;

#[derive(Debug)]
struct InventoryState {
    store: InventoryStore,
    ledger: ConsumptionLedger,
}

#[derive(Debug)]
pub struct SharedInventory {
    inner: RwLock<InventoryState>,
}

impl SharedInventory {
    pub fn new(store: InventoryStore) -> Self {
        Self {
            inner: RwLock::new(InventoryState {
                store,
                ledger: ConsumptionLedger::new(),
            }),
        }
    }

    pub fn from_seed(seed: impl IntoIterator<Item = SeedItem>) -> DomainResult<Self> {
        Ok(Self::new(InventoryStore::from_seed(seed)?))
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, InventoryState>> {
        self.inner
            .read()
            .map_err(|_| DomainError::unavailable("inventory lock poisoned"))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, InventoryState>> {
        self.inner
            .write()
            .map_err(|_| DomainError::unavailable("inventory lock poisoned"))
    }

    pub fn record_consumption(&self, code: &str, quantity: u32) -> DomainResult<ConsumptionEntry> {
        let mut state = self.write()?;
        let InventoryState { store, ledger } = &mut *state;
        ledger.record_consumption(store, code, quantity)
    }

    pub fn consult_last_consumption(&self) -> DomainResult<ConsumptionEntry> {
        self.write()?.ledger.consult_last_consumption()
    }

    pub fn find_by_code(&self, code: &str) -> DomainResult<Option<InventoryRecord>> {
        Ok(self.read()?.store.find_by_code(code).cloned())
    }

    pub fn linear_find(&self, code: &str) -> DomainResult<Option<InventoryRecord>> {
        let state = self.read()?;
        Ok(linear_find(state.store.records(), code).cloned())
    }

    /// Ordered lookup; sorts a copy of the records by code first.
    pub fn binary_find(&self, code: &str) -> DomainResult<Option<InventoryRecord>> {
        let sorted = sort_by_code(self.read()?.store.records());
        Ok(binary_find(&sorted, code).cloned())
    }

    pub fn rank_by(&self, field: RankField) -> DomainResult<Vec<InventoryRecord>> {
        Ok(rank_by(self.read()?.store.records(), field))
    }

    pub fn snapshot(&self) -> DomainResult<Vec<InventoryRecord>> {
        Ok(self.read()?.store.snapshot())
    }

    /// Chronological copy of every recorded consumption.
    pub fn chronological(&self) -> DomainResult<Vec<ConsumptionEntry>> {
        Ok(self.read()?.ledger.chronological().cloned().collect())
    }

    pub fn pending_consultations(&self) -> DomainResult<usize> {
        Ok(self.read()?.ledger.pending_consultations())
    }
}
