//! Seed catalogs.
//!
//! The demonstration catalog mirrors the ConfereAí prototype; custom catalogs are
//! JSON arrays of [`SeedItem`].

use std::path::Path;

use thiserror::Error;

use confereai_core::DomainError;

use crate::item::SeedItem;
use crate::store::InventoryStore;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid catalog: {0}")]
    Domain(#[from] DomainError),
}

/// The seven-item catalog used by the demonstration run.
pub fn demo_catalog() -> Vec<SeedItem> {
    vec![
        SeedItem::new("SER-10ML", "Seringa Descartável 10ml", "Insumos", 850),
        SeedItem::new("LUV-CIR-M", "Luva Cirúrgica (Par)", "EPI", 150),
        SeedItem::new("GAZ-EST-100", "Gaze Estéril (Pacote c/ 100)", "Curativos", 75),
        SeedItem::new("ALC-70-1L", "Álcool Etílico 70% (1L)", "Antissépticos", 48),
        SeedItem::new("SUT-NY-30", "Fio de Sutura Nylon 3-0", "Cirúrgico", 35),
        SeedItem::new("MAS-N95", "Máscara N95", "EPI", 1200),
        SeedItem::new("ATA-CRP-10", "Atadura de Crepe 10cm", "Curativos", 210),
    ]
}

pub fn from_json_str(json: &str) -> Result<Vec<SeedItem>, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

pub fn from_json_file(path: impl AsRef<Path>) -> Result<Vec<SeedItem>, CatalogError> {
    let raw = std::fs::read_to_string(path)?;
    from_json_str(&raw)
}

/// Parse a JSON catalog and build the store from it in one step.
pub fn load_store(json: &str) -> Result<InventoryStore, CatalogError> {
    Ok(InventoryStore::from_seed(from_json_str(json)?)?)
}
