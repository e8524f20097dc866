//! Error types for the etik-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the etik library.
#[derive(Error, Debug)]
pub enum EtikError {
    /// Dataset loading error.
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// Order lookup error.
    #[error("lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors owned by the dataset loading boundary.
///
/// Field-level parse misses inside a row are never errors; they degrade to
/// per-field defaults in the extractor. Only the dataset itself failing to
/// materialize surfaces here.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The data file does not exist.
    #[error("data file not found: {path}")]
    Unavailable { path: PathBuf },

    /// The file exists but could not be read or parsed.
    #[error("failed to read dataset: {0}")]
    Read(String),

    /// The workbook contains no worksheets.
    #[error("workbook has no worksheets")]
    NoWorksheet,

    /// The sheet is empty, so there is no header row to map columns from.
    #[error("dataset has no header row")]
    NoHeader,

    /// The file extension maps to no known loader.
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),
}

/// Errors related to order lookup.
#[derive(Error, Debug)]
pub enum LookupError {
    /// No row matches the requested order number.
    #[error("order №{order_number} not found")]
    OrderNotFound { order_number: String },
}

/// Result type for the etik library.
pub type Result<T> = std::result::Result<T, EtikError>;
