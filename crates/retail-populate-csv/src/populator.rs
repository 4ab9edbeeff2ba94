//! CSV populator for retail tables.

use crate::error::CSVPopulatorError;
use crate::record::CsvRecord;
use csv::Writer;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of rows written.
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writes generated tables to CSV files, header row first.
#[derive(Debug, Clone, Default)]
pub struct CSVPopulator;

impl CSVPopulator {
    pub fn new() -> Self {
        Self
    }

    /// Write `rows` to `output_path`, replacing any existing file.
    ///
    /// # Arguments
    ///
    /// * `table_name` - Table name, used for logging
    /// * `rows` - Rows to write, in order
    /// * `output_path` - Path to the output CSV file
    ///
    /// # Returns
    ///
    /// Metrics about the populate operation.
    pub fn populate<T: CsvRecord, P: AsRef<Path>>(
        &self,
        table_name: &str,
        rows: &[T],
        output_path: P,
    ) -> Result<PopulateMetrics, CSVPopulatorError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        let output_path = output_path.as_ref();
        info!(
            "Writing CSV file '{}' with {} rows for table '{}'",
            output_path.display(),
            rows.len(),
            table_name
        );

        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut writer = Writer::from_writer(buf_writer);

        writer.write_record(T::HEADERS)?;

        for row in rows {
            writer.write_record(row.to_record())?;
            metrics.rows_written += 1;

            if metrics.rows_written % 10000 == 0 {
                debug!("Written {} rows", metrics.rows_written);
            }
        }

        writer.flush()?;
        let inner = writer
            .into_inner()
            .map_err(|e| CSVPopulatorError::Io(std::io::Error::other(e.to_string())))?;
        drop(inner);

        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();

        info!(
            "CSV write complete for '{}': {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            table_name,
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }
}
