//! Demonstration driver for the ConfereAí stock-control simulation.
//!
//! [`run`] executes a [`SimulationPlan`] against an inventory store and returns a
//! [`SimulationReport`]; [`render`] turns the report into console text. The
//! default plan reproduces the prototype's daily run: three withdrawals, two
//! reverse consultations, one search of each kind and a stock ranking.

pub mod config;

use serde::Serialize;

use confereai_core::DomainError;
use confereai_inventory::{
    ConsumptionEntry, ConsumptionLedger, InventoryRecord, InventoryStore, RankField, binary_find,
    linear_find, rank_by, sort_by_code,
};

pub use config::SimulationConfig;

/// Scripted steps of one simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationPlan {
    /// `(code, quantity)` withdrawals, in order.
    pub withdrawals: Vec<(String, u32)>,
    /// How many times to consult the most recent consumption.
    pub consultations: usize,
    pub linear_query: String,
    pub binary_query: String,
    pub rank_field: RankField,
}

impl Default for SimulationPlan {
    fn default() -> Self {
        Self {
            withdrawals: vec![
                ("GAZ-EST-100".to_string(), 10),
                ("SER-10ML".to_string(), 50),
                ("ALC-70-1L".to_string(), 2),
            ],
            consultations: 2,
            linear_query: "SUT-NY-30".to_string(),
            binary_query: "LUV-CIR-M".to_string(),
            rank_field: RankField::StockLevel,
        }
    }
}

/// A withdrawal the ledger declined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rejection {
    pub code: String,
    pub quantity: u32,
    pub reason: String,
}

/// Outcome of one run. Serializes with camelCase keys throughout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationReport {
    /// Chronological view after all withdrawals.
    pub chronological: Vec<ConsumptionEntry>,
    pub rejected: Vec<Rejection>,
    /// One slot per consultation; `None` when nothing was left to consult.
    pub consultations: Vec<Option<ConsumptionEntry>>,
    pub linear_query: String,
    pub linear_result: Option<InventoryRecord>,
    pub binary_query: String,
    pub binary_result: Option<InventoryRecord>,
    pub rank_field: RankField,
    pub ranking: Vec<InventoryRecord>,
}

/// Execute `plan` against `store`. Declined withdrawals are collected, not fatal.
pub fn run(store: &mut InventoryStore, plan: &SimulationPlan) -> SimulationReport {
    let mut ledger = ConsumptionLedger::new();
    let mut rejected = Vec::new();

    for (code, quantity) in &plan.withdrawals {
        if let Err(err) = ledger.record_consumption(store, code, *quantity) {
            rejected.push(Rejection {
                code: code.clone(),
                quantity: *quantity,
                reason: err.to_string(),
            });
        }
    }
    let chronological: Vec<ConsumptionEntry> = ledger.chronological().cloned().collect();

    let consultations = (0..plan.consultations)
        .map(|_| match ledger.consult_last_consumption() {
            Ok(entry) => Some(entry),
            Err(DomainError::EmptyConsultation) => None,
            Err(err) => {
                tracing::error!(%err, "unexpected consultation failure");
                None
            }
        })
        .collect();

    let linear_result = linear_find(store.records(), &plan.linear_query).cloned();

    let sorted = sort_by_code(store.records());
    let binary_result = binary_find(&sorted, &plan.binary_query).cloned();

    let ranking = rank_by(store.records(), plan.rank_field);

    tracing::info!(
        recorded = chronological.len(),
        rejected = rejected.len(),
        pending = ledger.pending_consultations(),
        "simulation finished"
    );

    SimulationReport {
        chronological,
        rejected,
        consultations,
        linear_query: plan.linear_query.clone(),
        linear_result,
        binary_query: plan.binary_query.clone(),
        binary_result,
        rank_field: plan.rank_field,
        ranking,
    }
}

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn describe(record: Option<&InventoryRecord>) -> String {
    match record {
        Some(r) => format!(
            "{} | {} | {} | stock {}",
            r.code(),
            r.name(),
            r.category(),
            r.stock_level()
        ),
        None => "not found".to_string(),
    }
}

/// Console narration of a report.
pub fn render(report: &SimulationReport) -> String {
    let mut out = Vec::new();

    out.push("--- ConfereAí simulation ---".to_string());

    out.push(String::new());
    out.push("[Consumption log, chronological]".to_string());
    for entry in &report.chronological {
        let e = entry.payload();
        out.push(format!(
            " -> {}: {} x {}",
            e.occurred_at.format(TIMESTAMP_FORMAT),
            e.quantity,
            e.item_name
        ));
    }
    for r in &report.rejected {
        out.push(format!(" !! {} x {} rejected: {}", r.quantity, r.code, r.reason));
    }

    out.push(String::new());
    out.push("[Latest consumptions, most recent first]".to_string());
    for slot in &report.consultations {
        match slot {
            Some(entry) => {
                let e = entry.payload();
                out.push(format!(
                    " <- {} at {}",
                    e.item_name,
                    e.occurred_at.format(TIMESTAMP_FORMAT)
                ));
            }
            None => out.push(" <- no recent consumption to show".to_string()),
        }
    }

    out.push(String::new());
    out.push(format!("[Linear search for '{}']", report.linear_query));
    out.push(format!(" {}", describe(report.linear_result.as_ref())));
    out.push(format!("[Binary search for '{}']", report.binary_query));
    out.push(format!(" {}", describe(report.binary_result.as_ref())));

    out.push(String::new());
    out.push(format!("[Ranking by {}]", report.rank_field));
    for r in &report.ranking {
        out.push(format!(" -> {:<30} | {}", r.name(), r.stock_level()));
    }

    out.join("\n")
}
