//! Consumption ledger: withdrawals out of inventory.
//!
//! Every successful withdrawal decrements the matching record and produces one
//! [`ConsumptionEvent`], which lands in two views of the same log:
//!
//! - the chronological view (oldest first, never shrinks);
//! - the consultation view (most recent first, drained by
//!   [`ConsumptionLedger::consult_last_consumption`]).

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use confereai_core::{DomainError, DomainResult, ItemCode};
use confereai_events::{EntryState, Event, EventEnvelope, EventLog};

use crate::store::InventoryStore;

/// Event: stock withdrawn for one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionEvent {
    pub occurred_at: DateTime<Utc>,
    pub code: ItemCode,
    /// Item name as it was when the withdrawal was recorded.
    pub item_name: String,
    pub quantity: u32,
}

impl Event for ConsumptionEvent {
    fn event_type(&self) -> &'static str {
        "inventory.item.consumed"
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

/// A consumption event together with its log identity and position.
pub type ConsumptionEntry = EventEnvelope<ConsumptionEvent>;

#[derive(Debug, Clone, Default)]
pub struct ConsumptionLedger {
    log: EventLog<ConsumptionEvent>,
}

impl ConsumptionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a withdrawal of `quantity` units of `code`, timestamped now.
    pub fn record_consumption(
        &mut self,
        store: &mut InventoryStore,
        code: &str,
        quantity: u32,
    ) -> DomainResult<ConsumptionEntry> {
        self.record_consumption_at(store, code, quantity, Utc::now())
    }

    /// Record a withdrawal with an explicit timestamp.
    ///
    /// The timestamp is truncated to whole seconds and never goes below the
    /// previous entry's. On error nothing changes: not the store, not either view.
    pub fn record_consumption_at(
        &mut self,
        store: &mut InventoryStore,
        code: &str,
        quantity: u32,
        at: DateTime<Utc>,
    ) -> DomainResult<ConsumptionEntry> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }

        let Some(record) = store.find_by_code(code) else {
            tracing::warn!(code, quantity, "consumption rejected: unknown product");
            return Err(DomainError::unknown_product(code));
        };
        let code = record.code().clone();
        let item_name = record.name().to_string();

        let remaining = store.adjust_stock(code.as_str(), -i64::from(quantity))?;

        let mut occurred_at = at.trunc_subsecs(0);
        if let Some(last) = self.log.latest_occurred_at() {
            occurred_at = occurred_at.max(last);
        }

        let entry = self
            .log
            .append(ConsumptionEvent {
                occurred_at,
                code,
                item_name,
                quantity,
            })
            .clone();

        tracing::info!(
            code = %entry.payload().code,
            item = %entry.payload().item_name,
            quantity,
            remaining,
            sequence = entry.sequence_number(),
            "consumption recorded"
        );
        if remaining < 0 {
            tracing::debug!(code = %entry.payload().code, remaining, "stock in deficit");
        }

        Ok(entry)
    }

    /// Pop the most recent consumption that has not been consulted yet.
    ///
    /// Fails with [`DomainError::EmptyConsultation`] when there is nothing left; the
    /// chronological view is never affected.
    pub fn consult_last_consumption(&mut self) -> DomainResult<ConsumptionEntry> {
        match self.log.consult_latest() {
            Some(entry) => {
                tracing::debug!(
                    code = %entry.payload().code,
                    sequence = entry.sequence_number(),
                    "consumption consulted"
                );
                Ok(entry.clone())
            }
            None => {
                tracing::debug!("no recent consumption to consult");
                Err(DomainError::EmptyConsultation)
            }
        }
    }

    /// All recorded consumptions, oldest first.
    pub fn chronological(&self) -> impl DoubleEndedIterator<Item = &ConsumptionEntry> + ExactSizeIterator {
        self.log.iter()
    }

    pub fn state_of(&self, sequence: u64) -> Option<EntryState> {
        self.log.state_of(sequence)
    }

    /// How many entries are still waiting in the consultation view.
    pub fn pending_consultations(&self) -> usize {
        self.log.pending()
    }

    /// Total units withdrawn for `code` across the whole log.
    pub fn total_consumed(&self, code: &str) -> u64 {
        self.log
            .iter()
            .filter(|e| e.payload().code.as_str() == code)
            .map(|e| u64::from(e.payload().quantity))
            .sum()
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::demo_catalog;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    fn demo_store() -> InventoryStore {
        InventoryStore::from_seed(demo_catalog()).unwrap()
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 2, 8, 30, 0).unwrap()
    }

    #[test]
    fn recording_decrements_stock_and_fills_both_views() {
        let mut store = demo_store();
        let mut ledger = ConsumptionLedger::new();

        let entry = ledger.record_consumption(&mut store, "SER-10ML", 50).unwrap();

        assert_eq!(store.find_by_code("SER-10ML").unwrap().stock_level(), 800);
        assert_eq!(ledger.len(), 1);
        let first = ledger.chronological().next().unwrap();
        assert_eq!(first.payload().quantity, 50);
        assert_eq!(first.payload().item_name, "Seringa Descartável 10ml");

        let consulted = ledger.consult_last_consumption().unwrap();
        assert_eq!(consulted, entry);
        assert_eq!(ledger.pending_consultations(), 0);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.state_of(1), Some(EntryState::Consulted));
    }

    #[test]
    fn unknown_product_changes_nothing() {
        let mut store = demo_store();
        let mut ledger = ConsumptionLedger::new();
        ledger.record_consumption(&mut store, "GAZ-EST-100", 10).unwrap();
        let store_before = store.clone();

        let err = ledger
            .record_consumption(&mut store, "DOES-NOT-EXIST", 5)
            .unwrap_err();

        assert_eq!(err, DomainError::UnknownProduct("DOES-NOT-EXIST".into()));
        assert_eq!(store, store_before);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.pending_consultations(), 1);
    }

    #[test]
    fn zero_quantity_is_rejected_before_any_mutation() {
        let mut store = demo_store();
        let mut ledger = ConsumptionLedger::new();
        let before = store.clone();

        assert!(matches!(
            ledger.record_consumption(&mut store, "SER-10ML", 0),
            Err(DomainError::Validation(_))
        ));
        assert_eq!(store, before);
        assert!(ledger.is_empty());
    }

    #[test]
    fn consulting_an_empty_ledger_is_informational() {
        let mut ledger = ConsumptionLedger::new();
        let err = ledger.consult_last_consumption().unwrap_err();
        assert_eq!(err, DomainError::EmptyConsultation);
        assert!(err.is_informational());
        assert!(ledger.is_empty());
    }

    #[test]
    fn over_withdrawal_leaves_a_deficit() {
        let mut store = demo_store();
        let mut ledger = ConsumptionLedger::new();
        ledger.record_consumption(&mut store, "SUT-NY-30", 40).unwrap();
        assert_eq!(store.find_by_code("SUT-NY-30").unwrap().stock_level(), -5);
    }

    #[test]
    fn timestamps_are_whole_seconds_and_never_go_backwards() {
        let mut store = demo_store();
        let mut ledger = ConsumptionLedger::new();

        let later = t0() + Duration::milliseconds(1_750);
        let first = ledger
            .record_consumption_at(&mut store, "MAS-N95", 1, later)
            .unwrap();
        assert_eq!(first.payload().occurred_at, t0() + Duration::seconds(1));

        // Clock stepped back: clamp to the previous entry.
        let second = ledger
            .record_consumption_at(&mut store, "MAS-N95", 1, t0())
            .unwrap();
        assert_eq!(second.payload().occurred_at, first.payload().occurred_at);
    }

    #[test]
    fn demonstration_sequence() {
        let mut store = demo_store();
        let mut ledger = ConsumptionLedger::new();

        ledger.record_consumption(&mut store, "GAZ-EST-100", 10).unwrap();
        ledger.record_consumption(&mut store, "SER-10ML", 50).unwrap();
        ledger.record_consumption(&mut store, "ALC-70-1L", 2).unwrap();

        let codes: Vec<&str> = ledger
            .chronological()
            .map(|e| e.payload().code.as_str())
            .collect();
        assert_eq!(codes, vec!["GAZ-EST-100", "SER-10ML", "ALC-70-1L"]);

        assert_eq!(ledger.consult_last_consumption().unwrap().payload().code, "ALC-70-1L");
        assert_eq!(ledger.consult_last_consumption().unwrap().payload().code, "SER-10ML");
        assert_eq!(ledger.pending_consultations(), 1);
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.total_consumed("SER-10ML"), 50);
    }

    proptest! {
        /// Property: for any run of valid withdrawals, the chronological view matches
        /// call order, stock drops by exactly the recorded quantities, and M
        /// consultations return the last M in reverse.
        #[test]
        fn fifo_lifo_and_stock_accounting(
            calls in prop::collection::vec((0usize..7, 1u32..100), 0..40),
            consult_ratio in 0.0f64..=1.0,
        ) {
            let catalog = demo_catalog();
            let mut store = demo_store();
            let mut ledger = ConsumptionLedger::new();
            let total_before = store.total_stock();

            for (idx, qty) in &calls {
                ledger.record_consumption(&mut store, &catalog[*idx].code, *qty).unwrap();
            }

            let recorded: Vec<(String, u32)> = ledger
                .chronological()
                .map(|e| (e.payload().code.to_string(), e.payload().quantity))
                .collect();
            let expected: Vec<(String, u32)> = calls
                .iter()
                .map(|(idx, qty)| (catalog[*idx].code.clone(), *qty))
                .collect();
            prop_assert_eq!(&recorded, &expected);

            let withdrawn: i64 = calls.iter().map(|(_, q)| i64::from(*q)).sum();
            prop_assert_eq!(store.total_stock(), total_before - withdrawn);

            let m = ((calls.len() as f64) * consult_ratio) as usize;
            for k in 0..m {
                let entry = ledger.consult_last_consumption().unwrap();
                prop_assert_eq!(entry.sequence_number() as usize, calls.len() - k);
            }
            prop_assert_eq!(ledger.len(), calls.len());
            prop_assert_eq!(ledger.pending_consultations(), calls.len() - m);

            let stamps: Vec<_> = ledger.chronological().map(|e| e.payload().occurred_at).collect();
            prop_assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
