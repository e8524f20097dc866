//! Excel workbook loading via calamine.

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use tracing::info;

use crate::error::DatasetError;
use crate::models::row::{normalize_column, CellValue, RawRow};

use super::{DataLoader, Dataset};

/// Loads the first worksheet of an `.xlsx` workbook. The first row is the
/// header; header names are normalized on load.
#[derive(Debug, Clone, Default)]
pub struct XlsxDataLoader;

impl XlsxDataLoader {
    pub fn new() -> Self {
        Self
    }
}

impl DataLoader for XlsxDataLoader {
    fn load(&self, path: &Path) -> Result<Dataset, DatasetError> {
        if !path.exists() {
            return Err(DatasetError::Unavailable {
                path: path.to_path_buf(),
            });
        }

        let mut workbook: Xlsx<std::io::BufReader<std::fs::File>> =
            open_workbook(path).map_err(|e: calamine::XlsxError| DatasetError::Read(e.to_string()))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or(DatasetError::NoWorksheet)?
            .map_err(|e| DatasetError::Read(e.to_string()))?;

        let mut rows_iter = range.rows();
        let header_row = rows_iter.next().ok_or(DatasetError::NoHeader)?;
        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| normalize_column(&cell_text(cell)))
            .collect();

        let mut rows = Vec::new();
        for sheet_row in rows_iter {
            let mut row = RawRow::new();
            for (header, cell) in headers.iter().zip(sheet_row.iter()) {
                row.insert(header, cell_value(cell));
            }
            rows.push(row);
        }

        info!(
            path = %path.display(),
            rows = rows.len(),
            columns = headers.len(),
            "loaded workbook"
        );

        Ok(Dataset::new(headers, rows))
    }
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        other => CellValue::Text(format!("{}", other)),
    }
}

fn cell_text(cell: &Data) -> String {
    cell_value(cell).display_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_conversion() {
        assert_eq!(cell_value(&Data::Empty), CellValue::Empty);
        assert_eq!(
            cell_value(&Data::String("Шкаф".to_string())),
            CellValue::Text("Шкаф".to_string())
        );
        assert_eq!(cell_value(&Data::Float(12.5)), CellValue::Number(12.5));
        assert_eq!(cell_value(&Data::Int(101)), CellValue::Number(101.0));
    }

    #[test]
    fn test_whole_float_order_number_stringifies_without_suffix() {
        // sheets routinely store order numbers as float cells
        assert_eq!(cell_value(&Data::Float(101.0)).display_string(), "101");
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let err = XlsxDataLoader::new()
            .load(Path::new("/nonexistent/РАСКРОЙ 2025.xlsx"))
            .unwrap_err();
        assert!(matches!(err, DatasetError::Unavailable { .. }));
    }
}
