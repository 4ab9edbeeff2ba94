//! CLI argument definitions for dataset generation.

use clap::Args;
use retail_core::{ConfigError, DatasetConfig};
use std::path::PathBuf;

/// Dataset arguments; anything not given falls back to the config file,
/// then to the built-in defaults.
#[derive(Args, Clone, Debug, Default)]
pub struct DatasetArgs {
    /// Random seed for deterministic generation (same seed = same data) [default: 42]
    #[arg(long)]
    pub seed: Option<u64>,

    /// Dataset configuration YAML file (table sizes, date windows, defect rates)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of products in the catalog
    #[arg(long)]
    pub products: Option<usize>,

    /// Number of sales orders before duplicate injection
    #[arg(long)]
    pub orders: Option<usize>,

    /// Number of inventory snapshot days
    #[arg(long)]
    pub days: Option<u32>,

    /// Dry-run mode: generate every table and log its size without writing files
    #[arg(long)]
    pub dry_run: bool,
}

impl DatasetArgs {
    /// Build the dataset configuration from the config file and overrides.
    pub fn resolve_config(&self) -> Result<DatasetConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => DatasetConfig::from_file(path)?,
            None => DatasetConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(count) = self.products {
            config.products.count = count;
        }
        if let Some(count) = self.orders {
            config.sales.count = count;
        }
        if let Some(days) = self.days {
            config.inventory.days = days;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = DatasetArgs::default().resolve_config().unwrap();
        assert_eq!(config, DatasetConfig::default());
    }

    #[test]
    fn test_overrides() {
        let args = DatasetArgs {
            seed: Some(7),
            products: Some(50),
            orders: Some(1_000),
            days: Some(5),
            ..DatasetArgs::default()
        };
        let config = args.resolve_config().unwrap();

        assert_eq!(config.seed, 7);
        assert_eq!(config.products.count, 50);
        assert_eq!(config.sales.count, 1_000);
        assert_eq!(config.inventory.days, 5);
    }

    #[test]
    fn test_cli_seed_beats_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed: 9\nproducts:\n  count: 12").unwrap();

        let from_file = DatasetArgs {
            config: Some(file.path().to_path_buf()),
            ..DatasetArgs::default()
        };
        let config = from_file.resolve_config().unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(config.products.count, 12);

        let overridden = DatasetArgs {
            seed: Some(1),
            ..from_file
        };
        assert_eq!(overridden.resolve_config().unwrap().seed, 1);
    }

    #[test]
    fn test_invalid_override() {
        let args = DatasetArgs {
            products: Some(0),
            ..DatasetArgs::default()
        };
        assert!(matches!(
            args.resolve_config(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_missing_config_file() {
        let args = DatasetArgs {
            config: Some(PathBuf::from("/nonexistent/promo-pulse.yaml")),
            ..DatasetArgs::default()
        };
        assert!(matches!(args.resolve_config(), Err(ConfigError::IoError(_))));
    }
}
