//! Inventory domain module.
//!
//! This crate contains the stock-control rules of the simulation, implemented as
//! deterministic in-memory logic (no IO besides optional catalog loading):
//!
//! - [`store`]: the fixed catalog of records and stock adjustment;
//! - [`search`]: unordered and ordered lookup by code;
//! - [`ranking`]: partition-sort ranking by a numeric field;
//! - [`consumption`]: the withdrawal ledger with its chronological and
//!   consultation views;
//! - [`shared`]: a lock-guarded facade for concurrent callers.

pub mod catalog;
pub mod consumption;
pub mod item;
pub mod ranking;
pub mod search;
pub mod shared;
pub mod store;

pub use catalog::{CatalogError, demo_catalog};
pub use consumption::{ConsumptionEntry, ConsumptionEvent, ConsumptionLedger};
pub use item::{InventoryRecord, SeedItem};
pub use ranking::{RankField, rank_by, rank_by_key};
pub use search::{binary_find, is_sorted_by_code, linear_find, sort_by_code};
pub use shared::SharedInventory;
pub use store::InventoryStore;
