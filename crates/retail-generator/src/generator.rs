//! Top-level generator producing every table of a dataset.

use crate::generators::{
    generate_campaign_plan, generate_inventory_snapshot, generate_products, generate_sales_raw,
    generate_stores, InventoryBatch, ProductCatalog, SalesBatch,
};
use crate::stream::RandomStream;
use rand::distributions::WeightedError;
use retail_core::{CampaignPlan, ConfigError, DatasetConfig, Store};
use tracing::info;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Configuration rejected by validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Distribution parameters rejected by `rand_distr`
    #[error("Invalid distribution parameters: {0}")]
    Distribution(String),

    /// Weights of a categorical draw rejected
    #[error("Invalid categorical weights: {0}")]
    Weights(#[from] WeightedError),

    /// A dependent table was requested without rows to reference
    #[error("Cannot generate {table} without {dependency}")]
    EmptyInput {
        table: &'static str,
        dependency: &'static str,
    },
}

impl From<rand_distr::NormalError> for GeneratorError {
    fn from(err: rand_distr::NormalError) -> Self {
        GeneratorError::Distribution(err.to_string())
    }
}

impl From<rand_distr::PoissonError> for GeneratorError {
    fn from(err: rand_distr::PoissonError) -> Self {
        GeneratorError::Distribution(err.to_string())
    }
}

/// All five tables of a generated dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub products: ProductCatalog,
    pub stores: Vec<Store>,
    pub sales: SalesBatch,
    pub inventory: InventoryBatch,
    pub campaigns: Vec<CampaignPlan>,
}

/// Generates a full dataset in dependency order.
///
/// Each table is seeded from the configured seed through its own
/// component stream, so regenerating with the same configuration gives the
/// same dataset regardless of call order.
pub struct DatasetGenerator {
    config: DatasetConfig,
    stream: RandomStream,
}

impl DatasetGenerator {
    /// Create a generator for the given configuration.
    pub fn new(config: DatasetConfig) -> Self {
        let stream = RandomStream::new(config.seed);
        Self { config, stream }
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    /// Validate the configuration and generate every table.
    pub fn generate(&self) -> Result<Dataset, GeneratorError> {
        self.config.validate()?;
        let seed = self.stream.seed();

        info!("Generating products ({} rows, seed={})", self.config.products.count, seed);
        let products = generate_products(&self.config.products, seed)?;
        products
            .report
            .log_summary("products", products.products.len());

        let stores = generate_stores();
        info!("Generated {} stores", stores.len());

        info!("Generating sales ({} base orders)", self.config.sales.count);
        let sales = generate_sales_raw(&products.products, &stores, &self.config.sales, seed)?;
        sales.report.log_summary("sales_raw", sales.orders.len());

        info!(
            "Generating inventory snapshot ({} days)",
            self.config.inventory.days
        );
        let inventory =
            generate_inventory_snapshot(&products.products, &stores, &self.config.inventory, seed)?;
        inventory
            .report
            .log_summary("inventory_snapshot", inventory.snapshots.len());

        let campaigns = generate_campaign_plan(&self.config.campaigns, seed);
        info!("Generated {} campaigns", campaigns.len());

        Ok(Dataset {
            products,
            stores,
            sales,
            inventory,
            campaigns,
        })
    }
}
