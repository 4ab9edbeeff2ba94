//! Core types for the promo-pulse retail dataset generator.
//!
//! This crate provides the foundational types shared by the generator and
//! the CSV writer:
//!
//! - [`Product`], [`Store`], [`SalesOrder`], [`InventorySnapshot`], [`CampaignPlan`] - table rows
//! - [`City`], [`Channel`], [`FulfillmentType`], [`Category`] - closed vocabularies
//! - [`DatasetConfig`] - dataset sizes and defect rates, loadable from YAML
//!
//! # Architecture
//!
//! ```text
//! retail-core (this crate)
//!    │
//!    ├─── retail-generator     (samples rows and injects defects)
//!    │
//!    └─── retail-populate-csv  (writes each table as CSV)
//! ```

pub mod config;
pub mod model;

// Re-exports for convenience
pub use config::{
    CampaignConfig, ConfigError, DatasetConfig, DefectRate, InventoryConfig, ProductConfig,
    SalesConfig,
};
pub use model::{
    CampaignPlan, Category, Channel, City, FulfillmentType, InventorySnapshot, LaunchFlag,
    PaymentLabel, PaymentStatus, Product, SalesOrder, Scope, Store, BRANDS, DIRTY_CITIES,
    ORDER_TIME_FORMAT,
};
