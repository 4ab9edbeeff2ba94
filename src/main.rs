//! Command-line interface for promo-pulse
//!
//! # Usage Examples
//!
//! ```bash
//! # Reference dataset into ./data
//! promo-pulse --out data --seed 42
//!
//! # Smaller dataset with custom defect rates
//! promo-pulse --out /tmp/retail --config dataset.yaml --orders 5000
//!
//! # Generate and log table sizes without writing files
//! RUST_LOG=info promo-pulse --dry-run
//! ```

use anyhow::Context;
use clap::Parser;
use promo_pulse::{generate, write_all, DatasetArgs};
use retail_populate_csv::CSVOutputArgs;

#[derive(Parser)]
#[command(name = "promo-pulse")]
#[command(about = "Generate a seeded retail dataset with injected data-quality defects")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    output: CSVOutputArgs,

    #[command(flatten)]
    dataset: DatasetArgs,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = cli
        .dataset
        .resolve_config()
        .context("Failed to load dataset configuration")?;

    if cli.dataset.dry_run {
        let dataset = generate(&config)?;
        tracing::info!("[DRY-RUN] Would write datasets to {:?}", cli.output.out);
        tracing::info!("[DRY-RUN] products: {} rows", dataset.products.products.len());
        tracing::info!("[DRY-RUN] stores: {} rows", dataset.stores.len());
        tracing::info!("[DRY-RUN] sales_raw: {} rows", dataset.sales.orders.len());
        tracing::info!(
            "[DRY-RUN] inventory_snapshot: {} rows",
            dataset.inventory.snapshots.len()
        );
        tracing::info!("[DRY-RUN] campaign_plan: {} rows", dataset.campaigns.len());
        return Ok(());
    }

    let summary = write_all(&config, &cli.output.out)?;
    let resolved = std::fs::canonicalize(&summary.out_dir)
        .with_context(|| format!("Failed to resolve {:?}", summary.out_dir))?;
    println!("Wrote datasets to: {}", resolved.display());

    Ok(())
}
