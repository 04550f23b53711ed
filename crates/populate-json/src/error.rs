//! Error types for the JSON file populator.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing or reading entity files.
#[derive(Error, Debug)]
pub enum PopulateError {
    /// The output directory could not be created.
    #[error("Failed to create output directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error on an entity file.
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON serialization or deserialization error.
    #[error("JSON error on {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}
