//! Dataset loading boundary.
//!
//! Loading is the one I/O seam of the crate; everything downstream of a
//! [`Dataset`] is a pure computation. Loaders are format-specific backends
//! behind one trait, selected by file extension in [`load_auto`].

mod csv;
mod xlsx;

use std::path::Path;

use crate::error::DatasetError;
use crate::models::row::RawRow;

pub use self::csv::CsvDataLoader;
pub use self::xlsx::XlsxDataLoader;

/// An ordered, in-memory collection of raw rows with their header.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<RawRow>,
}

impl Dataset {
    /// Build a dataset from normalized headers and rows.
    pub fn new(headers: Vec<String>, rows: Vec<RawRow>) -> Self {
        Self { headers, rows }
    }

    /// Normalized column names, in sheet order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Rows in sheet order.
    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A dataset loading backend.
pub trait DataLoader {
    /// Load the dataset at `path`.
    fn load(&self, path: &Path) -> Result<Dataset, DatasetError>;
}

/// Load a dataset, picking the loader from the file extension.
pub fn load_auto(path: &Path) -> Result<Dataset, DatasetError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "xlsx" | "xls" => XlsxDataLoader::new().load(path),
        "csv" => CsvDataLoader::new().load(path),
        other => Err(DatasetError::UnsupportedFormat(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_extension() {
        let err = load_auto(Path::new("orders.pdf")).unwrap_err();
        assert!(matches!(err, DatasetError::UnsupportedFormat(ext) if ext == "pdf"));
    }

    #[test]
    fn test_missing_extension() {
        let err = load_auto(Path::new("orders")).unwrap_err();
        assert!(matches!(err, DatasetError::UnsupportedFormat(ext) if ext.is_empty()));
    }
}
