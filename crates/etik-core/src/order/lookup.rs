//! Order lookup over a loaded dataset.

use tracing::{debug, info};

use crate::dataset::Dataset;
use crate::error::LookupError;
use crate::models::order::OrderRecord;
use crate::models::row::{columns, RawRow};

use super::extractor::RecordExtractor;

/// Finds an order row by number and extracts its record.
///
/// The comparison is exact string equality against the stringified order
/// column, so `"7"` and `"07"` are distinct order numbers. Multiple
/// matching rows resolve to the first in dataset order; the scan is a
/// pure synchronous read.
#[derive(Debug)]
pub struct OrderLookup<'a> {
    dataset: &'a Dataset,
    order_column: String,
}

impl<'a> OrderLookup<'a> {
    /// Create a lookup over a dataset, keyed on the default order column.
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            order_column: columns::ORDER_NUMBER.to_string(),
        }
    }

    /// Override the order-number column name.
    pub fn with_order_column(mut self, column: impl Into<String>) -> Self {
        self.order_column = column.into();
        self
    }

    /// Find the first row matching the order number and extract its record.
    pub fn find(&self, order_number: &str) -> Result<OrderRecord, LookupError> {
        let row = self.find_row(order_number)?;
        let record = RecordExtractor::new().extract(row);
        info!(order_number, item_name = %record.item_name, "order found");
        Ok(record)
    }

    /// Find the first row matching the order number.
    pub fn find_row(&self, order_number: &str) -> Result<&'a RawRow, LookupError> {
        debug!(
            order_number,
            rows = self.dataset.len(),
            "scanning dataset for order"
        );

        self.dataset
            .rows()
            .iter()
            .find(|row| row.display_string(&self.order_column) == order_number)
            .ok_or_else(|| LookupError::OrderNotFound {
                order_number: order_number.to_string(),
            })
    }
}
