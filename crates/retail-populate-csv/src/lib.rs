//! CSV file writer for the promo-pulse retail tables.
//!
//! This crate writes the tables produced by the retail-generator crate as
//! comma-separated files with a header row. Each row type implements
//! [`CsvRecord`], which fixes its column names and cell formatting.
//!
//! # Example
//!
//! ```ignore
//! use retail_populate_csv::CSVPopulator;
//!
//! let populator = CSVPopulator::new();
//! let metrics = populator.populate("stores", &stores, "/path/to/stores.csv")?;
//! ```

pub mod args;
mod error;
mod populator;
mod record;

pub use args::CSVOutputArgs;
pub use error::CSVPopulatorError;
pub use populator::{CSVPopulator, PopulateMetrics, DEFAULT_BUFFER_SIZE};
pub use record::CsvRecord;
