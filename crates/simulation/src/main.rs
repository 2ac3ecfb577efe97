use anyhow::Context;

use confereai_inventory::{InventoryStore, catalog};
use confereai_simulation::{SimulationConfig, SimulationPlan, render, run};

fn main() -> anyhow::Result<()> {
    let config = SimulationConfig::from_env();
    confereai_observability::init_with(config.log_format);
    config.report_ignored();

    let seed = match &config.catalog_path {
        Some(path) => catalog::from_json_file(path)
            .with_context(|| format!("loading catalog from {}", path.display()))?,
        None => {
            tracing::info!("no catalog configured; using the demonstration catalog");
            catalog::demo_catalog()
        }
    };

    let mut store = InventoryStore::from_seed(seed).context("building inventory")?;
    tracing::info!(items = store.len(), "inventory loaded");

    let report = run(&mut store, &SimulationPlan::default());
    println!("{}", render(&report));

    Ok(())
}
