//! Dataset orchestration: generate every table and write it to disk.

use anyhow::Context;
use retail_core::DatasetConfig;
use retail_generator::{Dataset, DatasetGenerator};
use retail_populate_csv::{CSVPopulator, CsvRecord, PopulateMetrics};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const PRODUCTS_FILE: &str = "products.csv";
pub const STORES_FILE: &str = "stores.csv";
pub const SALES_FILE: &str = "sales_raw.csv";
pub const INVENTORY_FILE: &str = "inventory_snapshot.csv";
pub const CAMPAIGNS_FILE: &str = "campaign_plan.csv";

/// Output files, in write order.
pub const OUTPUT_FILES: [&str; 5] = [
    PRODUCTS_FILE,
    STORES_FILE,
    SALES_FILE,
    INVENTORY_FILE,
    CAMPAIGNS_FILE,
];

/// A table written to disk.
#[derive(Debug, Clone)]
pub struct WrittenTable {
    pub table: &'static str,
    pub path: PathBuf,
    pub metrics: PopulateMetrics,
}

/// Result of [`write_all`].
#[derive(Debug, Clone)]
pub struct DatasetSummary {
    pub out_dir: PathBuf,
    pub tables: Vec<WrittenTable>,
    pub dataset: Dataset,
}

impl DatasetSummary {
    /// Rows written to a table's file, if it was written.
    pub fn rows_written(&self, table: &str) -> Option<u64> {
        self.tables
            .iter()
            .find(|t| t.table == table)
            .map(|t| t.metrics.rows_written)
    }
}

/// Generate every table without touching the filesystem.
pub fn generate(config: &DatasetConfig) -> anyhow::Result<Dataset> {
    DatasetGenerator::new(config.clone())
        .generate()
        .context("Failed to generate dataset")
}

/// Generate every table and write it under `out_dir`.
///
/// The directory is created if missing. Existing files are replaced, so
/// running twice with the same configuration leaves identical files.
pub fn write_all(config: &DatasetConfig, out_dir: &Path) -> anyhow::Result<DatasetSummary> {
    let dataset = generate(config)?;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {out_dir:?}"))?;

    let populator = CSVPopulator::new();
    let tables = vec![
        write_table(&populator, out_dir, "products", PRODUCTS_FILE, &dataset.products.products)?,
        write_table(&populator, out_dir, "stores", STORES_FILE, &dataset.stores)?,
        write_table(&populator, out_dir, "sales_raw", SALES_FILE, &dataset.sales.orders)?,
        write_table(
            &populator,
            out_dir,
            "inventory_snapshot",
            INVENTORY_FILE,
            &dataset.inventory.snapshots,
        )?,
        write_table(&populator, out_dir, "campaign_plan", CAMPAIGNS_FILE, &dataset.campaigns)?,
    ];

    info!(
        "Wrote {} tables to {:?} (seed={})",
        tables.len(),
        out_dir,
        config.seed
    );

    Ok(DatasetSummary {
        out_dir: out_dir.to_path_buf(),
        tables,
        dataset,
    })
}

fn write_table<T: CsvRecord>(
    populator: &CSVPopulator,
    out_dir: &Path,
    table: &'static str,
    file_name: &str,
    rows: &[T],
) -> anyhow::Result<WrittenTable> {
    let path = out_dir.join(file_name);
    let metrics = populator
        .populate(table, rows, &path)
        .with_context(|| format!("Failed to write {path:?}"))?;
    Ok(WrittenTable {
        table,
        path,
        metrics,
    })
}
