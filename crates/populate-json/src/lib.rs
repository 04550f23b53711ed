//! JSON file populator for the delivery-seed dataset.
//!
//! This crate writes each generated collection to its own pretty-printed
//! JSON array file and reads those files back.
//!
//! # Example
//!
//! ```ignore
//! use populate_json::JsonFilePopulator;
//! use seed_generator::{Catalog, DataGenerator, DatasetConfig};
//!
//! let dataset = DataGenerator::new(Catalog::current(), Some(42))
//!     .build(&DatasetConfig::default());
//!
//! let populator = JsonFilePopulator::new("files");
//! let metrics = populator.write_dataset(&dataset)?;
//! println!("Wrote {} records", metrics.records_written);
//! ```

pub mod args;
pub mod error;
pub mod populator;

pub use args::{DatasetCountArgs, GenerateArgs};
pub use error::PopulateError;
pub use populator::{JsonFilePopulator, PopulateMetrics, DEFAULT_OUTPUT_DIR};
