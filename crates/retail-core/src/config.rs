//! Dataset configuration.
//!
//! A [`DatasetConfig`] fixes everything the generators need besides the
//! vocabularies: the seed, table sizes, date windows and every defect rate.
//! The defaults reproduce the reference dataset; a YAML file may override
//! any subset of fields.
//!
//! ```yaml
//! seed: 7
//! products:
//!   count: 500
//! sales:
//!   count: 10000
//!   missing_discount:
//!     type: range
//!     min: 0.02
//!     max: 0.04
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Error type for configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading the configuration file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A value is out of its allowed range
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    fn invalid(field: &str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

/// Probability that a defect hits a row.
///
/// `Range` rates are resolved once per run: a single rate is drawn
/// uniformly from `[min, max]` and then applied to every row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DefectRate {
    Fixed { rate: f64 },
    Range { min: f64, max: f64 },
}

impl DefectRate {
    pub fn fixed(rate: f64) -> Self {
        DefectRate::Fixed { rate }
    }

    pub fn range(min: f64, max: f64) -> Self {
        DefectRate::Range { min, max }
    }

    /// Lowest and highest rate this defect can run at.
    pub fn bounds(&self) -> (f64, f64) {
        match *self {
            DefectRate::Fixed { rate } => (rate, rate),
            DefectRate::Range { min, max } => (min, max),
        }
    }

    fn validate(&self, field: &str) -> Result<(), ConfigError> {
        let (min, max) = self.bounds();
        if !(0.0..=1.0).contains(&min) || !(0.0..=1.0).contains(&max) {
            return Err(ConfigError::invalid(field, "rates must lie in [0, 1]"));
        }
        if min > max {
            return Err(ConfigError::invalid(
                field,
                format!("range minimum {min} exceeds maximum {max}"),
            ));
        }
        Ok(())
    }
}

/// Product catalog settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductConfig {
    pub count: usize,
    pub missing_cost: DefectRate,
    pub cost_above_price: DefectRate,
}

impl Default for ProductConfig {
    fn default() -> Self {
        Self {
            count: 300,
            missing_cost: DefectRate::range(0.01, 0.02),
            cost_above_price: DefectRate::fixed(0.01),
        }
    }
}

/// Sales transaction settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalesConfig {
    pub count: usize,
    pub window_start: NaiveDateTime,
    pub window_end: NaiveDateTime,
    pub missing_discount: DefectRate,
    pub duplicate_orders: DefectRate,
    pub corrupted_timestamps: DefectRate,
    pub quantity_outliers: DefectRate,
    pub price_outliers: DefectRate,
    pub malformed_payment: DefectRate,
}

impl Default for SalesConfig {
    fn default() -> Self {
        Self {
            count: 30_000,
            window_start: date(2025, 12, 1)
                .and_hms_opt(0, 0, 0)
                .expect("midnight is a valid time"),
            window_end: date(2025, 12, 30)
                .and_hms_opt(23, 59, 59)
                .expect("23:59:59 is a valid time"),
            missing_discount: DefectRate::range(0.02, 0.04),
            duplicate_orders: DefectRate::range(0.005, 0.01),
            corrupted_timestamps: DefectRate::range(0.005, 0.01),
            quantity_outliers: DefectRate::fixed(0.004),
            price_outliers: DefectRate::fixed(0.004),
            malformed_payment: DefectRate::fixed(0.003),
        }
    }
}

/// Inventory snapshot settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    pub days: u32,
    pub start_date: NaiveDate,
    /// Share of the product catalog tracked in the snapshot.
    pub sample_fraction: f64,
    pub negative_stock: DefectRate,
    pub extreme_stock: DefectRate,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            days: 30,
            start_date: date(2025, 12, 1),
            sample_fraction: 0.5,
            negative_stock: DefectRate::fixed(0.002),
            extreme_stock: DefectRate::fixed(0.002),
        }
    }
}

/// Campaign plan settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignConfig {
    pub count: usize,
    /// Campaign start dates are offsets from this date.
    pub anchor_date: NaiveDate,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            count: 10,
            anchor_date: date(2026, 1, 1),
        }
    }
}

/// Full dataset configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub seed: u64,
    pub products: ProductConfig,
    pub sales: SalesConfig,
    pub inventory: InventoryConfig,
    pub campaigns: CampaignConfig,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            products: ProductConfig::default(),
            sales: SalesConfig::default(),
            inventory: InventoryConfig::default(),
            campaigns: CampaignConfig::default(),
        }
    }
}

impl DatasetConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string and validate it.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: DatasetConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every rate and window.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.products
            .missing_cost
            .validate("products.missing_cost")?;
        self.products
            .cost_above_price
            .validate("products.cost_above_price")?;

        let sales = &self.sales;
        if sales.window_end <= sales.window_start {
            return Err(ConfigError::invalid(
                "sales.window_end",
                "window must end after it starts",
            ));
        }
        for (field, rate) in [
            ("sales.missing_discount", &sales.missing_discount),
            ("sales.duplicate_orders", &sales.duplicate_orders),
            ("sales.corrupted_timestamps", &sales.corrupted_timestamps),
            ("sales.quantity_outliers", &sales.quantity_outliers),
            ("sales.price_outliers", &sales.price_outliers),
            ("sales.malformed_payment", &sales.malformed_payment),
        ] {
            rate.validate(field)?;
        }
        if sales.count > 0 && self.products.count == 0 {
            return Err(ConfigError::invalid(
                "products.count",
                "sales need at least one product",
            ));
        }

        let inventory = &self.inventory;
        let fraction = inventory.sample_fraction;
        if fraction.is_nan() || fraction <= 0.0 || fraction > 1.0 {
            return Err(ConfigError::invalid(
                "inventory.sample_fraction",
                "must lie in (0, 1]",
            ));
        }
        inventory
            .negative_stock
            .validate("inventory.negative_stock")?;
        inventory.extreme_stock.validate("inventory.extreme_stock")?;

        Ok(())
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("hard-coded calendar date is valid")
}
