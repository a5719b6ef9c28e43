//! Dataset error types
//!
//! Defines all errors that can occur while loading the two source files.
//! Any of these is fatal to startup; the dashboard has no function without
//! its data.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the dataset layer
#[derive(Error, Debug)]
pub enum DataError {
    /// I/O operation failed
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Shipment CSV could not be parsed
    #[error("CSV error in {path:?}: {message}")]
    Csv { path: PathBuf, message: String },

    /// Boundary GeoJSON could not be parsed or has an unexpected shape
    #[error("GeoJSON error in {path:?}: {message}")]
    Geo { path: PathBuf, message: String },

    /// A record violates the dataset schema (row is 1-indexed, excluding the header)
    #[error("Invalid record at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },
}

/// Result type alias for dataset operations
pub type DataResult<T> = Result<T, DataError>;
