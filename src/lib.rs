//! Promo Pulse: seeded synthetic retail datasets with injected data-quality
//! defects.
//!
//! [`write_all`] generates the product catalog, store directory, raw sales,
//! inventory snapshot and campaign plan for a [`DatasetConfig`], then writes
//! each table as a CSV file. The same configuration always yields the same
//! bytes on disk.
//!
//! [`DatasetConfig`]: retail_core::DatasetConfig

pub mod args;
pub mod dataset;

pub use args::DatasetArgs;
pub use dataset::{
    generate, write_all, DatasetSummary, WrittenTable, CAMPAIGNS_FILE, INVENTORY_FILE,
    OUTPUT_FILES, PRODUCTS_FILE, SALES_FILE, STORES_FILE,
};
