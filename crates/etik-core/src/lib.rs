//! Core library for cutting-sheet order processing.
//!
//! This crate provides:
//! - dataset loading from Excel workbooks and CSV exports
//! - per-field extraction of order records from raw sheet rows
//! - order lookup by number over a loaded dataset
//! - label planning for the packaging-label renderer

pub mod dataset;
pub mod error;
pub mod label;
pub mod models;
pub mod order;

pub use dataset::{load_auto, CsvDataLoader, DataLoader, Dataset, XlsxDataLoader};
pub use error::{DatasetError, EtikError, LookupError, Result};
pub use label::{
    FieldOverrides, LabelContent, LabelKind, LabelLayout, LabelPlanner, LabelRequest,
};
pub use models::config::EtikConfig;
pub use models::order::{Dimensions, OrderRecord};
pub use models::row::{CellValue, RawRow};
pub use order::rules::{parse_product_description, ProductDescription};
pub use order::{OrderLookup, RecordExtractor};
