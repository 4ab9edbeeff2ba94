//! Dataset generator for the promo-pulse retail simulator.
//!
//! This crate produces the five retail tables from a [`retail_core::DatasetConfig`] and a
//! seed. Every component draws from its own seeded stream, so each table is
//! a pure function of the seed, its settings and the tables it depends on.
//!
//! # Architecture
//!
//! ```text
//! DatasetConfig
//!        │
//!        ▼
//! ┌──────────────────┐      ┌────────────────────────┐
//! │ DatasetGenerator │─────▶│ RandomStream           │
//! │                  │      │  component_seed(seed,c)│
//! └────────┬─────────┘      └────────────────────────┘
//!          │
//!          ├── products   ── missing cost ─▶ cost above price
//!          ├── stores
//!          ├── sales      ── city ─▶ discount ─▶ duplicates ─▶ timestamps
//!          │                 ─▶ quantity ─▶ price ─▶ payment label
//!          ├── inventory  ── negative stock ─▶ extreme stock
//!          └── campaigns
//! ```
//!
//! # Example
//!
//! ```rust
//! use retail_core::DatasetConfig;
//! use retail_generator::DatasetGenerator;
//!
//! let mut config = DatasetConfig::default();
//! config.products.count = 40;
//! config.sales.count = 500;
//! config.inventory.days = 2;
//!
//! let dataset = DatasetGenerator::new(config).generate().unwrap();
//! assert_eq!(dataset.products.products.len(), 40);
//! assert_eq!(dataset.stores.len(), 18);
//! ```
//!
//! # Defect passes
//!
//! Each defect is a separate pass over the whole table with its own
//! random mask, applied in a fixed order. Masks are never merged, so a row
//! can carry several defects at once.

pub mod defects;
pub mod generator;
pub mod generators;
pub mod stream;

// Re-exports for convenience
pub use defects::{DefectKind, DefectReport, Injected};
pub use generator::{Dataset, DatasetGenerator, GeneratorError};
pub use generators::{
    generate_campaign_plan, generate_inventory_snapshot, generate_products, generate_sales_raw,
    generate_stores, InventoryBatch, ProductCatalog, SalesBatch,
};
pub use stream::{Component, RandomStream};
