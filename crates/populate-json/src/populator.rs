//! JSON file populator.

use crate::error::PopulateError;
use seed_core::EntityKind;
use seed_generator::Dataset;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Directory the entity files are written to when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "files";

/// Default buffer size for file writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of records written.
    pub records_written: u64,
    /// Number of files written.
    pub files_written: u64,
    /// Total size of the written files in bytes.
    pub file_size_bytes: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl PopulateMetrics {
    /// Calculate records per second.
    pub fn records_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.records_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Calculate bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.file_size_bytes as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    fn absorb(&mut self, other: &PopulateMetrics) {
        self.records_written += other.records_written;
        self.files_written += other.files_written;
        self.file_size_bytes += other.file_size_bytes;
    }
}

/// Writes each entity collection to `<output_dir>/<collection>.json`.
///
/// Files are UTF-8 JSON arrays indented with two spaces. Non-ASCII text is
/// written as-is, field order follows the record types.
#[derive(Debug, Clone)]
pub struct JsonFilePopulator {
    output_dir: PathBuf,
}

impl JsonFilePopulator {
    /// Create a new populator writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of the file holding the given kind.
    pub fn path_for(&self, kind: EntityKind) -> PathBuf {
        self.output_dir.join(kind.file_name())
    }

    /// Write one collection, creating the output directory if needed.
    ///
    /// An existing file for the same kind is replaced.
    pub fn write<T: Serialize>(
        &self,
        kind: EntityKind,
        records: &[T],
    ) -> Result<PopulateMetrics, PopulateError> {
        let start_time = Instant::now();

        std::fs::create_dir_all(&self.output_dir).map_err(|source| PopulateError::CreateDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let path = self.path_for(kind);
        debug!("Writing {} records to {}", records.len(), path.display());

        let io_err = |source| PopulateError::Io {
            path: path.clone(),
            source,
        };

        let file = File::create(&path).map_err(io_err)?;
        let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        serde_json::to_writer_pretty(&mut writer, records).map_err(|source| {
            PopulateError::Json {
                path: path.clone(),
                source,
            }
        })?;
        writer.flush().map_err(io_err)?;
        drop(writer);

        let metrics = PopulateMetrics {
            records_written: records.len() as u64,
            files_written: 1,
            file_size_bytes: std::fs::metadata(&path).map_err(io_err)?.len(),
            total_duration: start_time.elapsed(),
        };

        info!(
            "Wrote {} ({} records, {} bytes) in {:?}",
            path.display(),
            metrics.records_written,
            metrics.file_size_bytes,
            metrics.total_duration
        );

        Ok(metrics)
    }

    /// Write all five collections of a dataset.
    ///
    /// Stops at the first file that fails; files already written stay on disk.
    pub fn write_dataset(&self, dataset: &Dataset) -> Result<PopulateMetrics, PopulateError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        info!("Saving files into {}", self.output_dir.display());

        metrics.absorb(&self.write(EntityKind::Restaurants, &dataset.restaurants)?);
        metrics.absorb(&self.write(EntityKind::Users, &dataset.users)?);
        metrics.absorb(&self.write(EntityKind::MenuItems, &dataset.menu_items)?);
        metrics.absorb(&self.write(EntityKind::Orders, &dataset.orders)?);
        metrics.absorb(&self.write(EntityKind::Reviews, &dataset.reviews)?);

        metrics.total_duration = start_time.elapsed();

        info!(
            "All files saved: {} records, {} bytes in {:?} ({:.2} records/sec)",
            metrics.records_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.records_per_second()
        );

        Ok(metrics)
    }

    /// Read one collection back into typed records.
    pub fn read<T: DeserializeOwned>(&self, kind: EntityKind) -> Result<Vec<T>, PopulateError> {
        let path = self.path_for(kind);
        let file = File::open(&path).map_err(|source| PopulateError::Io {
            path: path.clone(),
            source,
        })?;

        serde_json::from_reader(BufReader::new(file))
            .map_err(|source| PopulateError::Json { path, source })
    }

    /// Read every collection back into a dataset.
    pub fn read_dataset(&self) -> Result<Dataset, PopulateError> {
        Ok(Dataset {
            restaurants: self.read(EntityKind::Restaurants)?,
            users: self.read(EntityKind::Users)?,
            menu_items: self.read(EntityKind::MenuItems)?,
            orders: self.read(EntityKind::Orders)?,
            reviews: self.read(EntityKind::Reviews)?,
        })
    }
}
