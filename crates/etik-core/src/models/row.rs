//! Raw tabular rows as they come out of a cutting sheet.

use std::collections::HashMap;

/// Column names recognized by the extractor, in their canonical
/// (whitespace-normalized) form.
pub mod columns {
    /// Order number, the lookup key.
    pub const ORDER_NUMBER: &str = "№ Заказа";
    /// Store / application number.
    pub const STORE_APPLICATION: &str = "№ магазина / заявка";
    /// Client name.
    pub const CLIENT: &str = "Клиент";
    /// Free-text product description.
    pub const NAME: &str = "Наименование";
    /// Carcase finish descriptor.
    pub const CARCASE: &str = "Корпус";
    /// Profile / extra components. The sheet pads this header with an
    /// irregular run of spaces, so matching goes through [`normalize_column`].
    pub const EXTRA_COMPONENT: &str = "Профиль / Доп. Элементы";
    /// Facade material.
    pub const FACADE: &str = "Фасад";
    /// Package weight in kilograms.
    pub const WEIGHT: &str = "ВЕС, КГ";
}

/// Collapse internal whitespace runs and trim, so header cells typed with
/// irregular padding map onto one canonical column name.
pub fn normalize_column(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// One scalar cell of a raw row.
///
/// Numeric cells are kept apart from textual ones because the weight rule
/// treats them differently, and because numeric order numbers must
/// stringify without a float suffix to compare against typed input.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Textual cell content, as typed.
    Text(String),
    /// Numeric cell content.
    Number(f64),
    /// Blank or absent cell.
    Empty,
}

impl CellValue {
    /// Render the cell the way the lookup and passthrough rules see it.
    /// Whole numbers print without a fractional part; blanks print empty.
    pub fn display_string(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Empty => String::new(),
        }
    }

    /// Whether the cell holds nothing.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

/// One spreadsheet row: a mapping from normalized column name to cell value.
///
/// Owned by the dataset, read-only to the extractor. Column presence is not
/// guaranteed; accessors degrade to empty values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: HashMap<String, CellValue>,
}

impl RawRow {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a cell under its normalized column name.
    pub fn insert(&mut self, column: &str, value: CellValue) {
        self.cells.insert(normalize_column(column), value);
    }

    /// Builder-style insert, convenient for constructing rows inline.
    pub fn with(mut self, column: &str, value: impl Into<CellValue>) -> Self {
        self.insert(column, value.into());
        self
    }

    /// Look up a cell by column name (normalized before matching).
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(&normalize_column(column))
    }

    /// String form of a cell; empty string when the column is absent or blank.
    pub fn display_string(&self, column: &str) -> String {
        self.get(column)
            .map(CellValue::display_string)
            .unwrap_or_default()
    }

    /// Number of cells present in the row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row holds no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_column_collapses_padding() {
        assert_eq!(
            normalize_column("Профиль /            Доп. Элементы"),
            columns::EXTRA_COMPONENT
        );
        assert_eq!(normalize_column("  № Заказа "), columns::ORDER_NUMBER);
        assert_eq!(normalize_column("Клиент"), "Клиент");
    }

    #[test]
    fn test_number_display_drops_float_suffix() {
        assert_eq!(CellValue::Number(101.0).display_string(), "101");
        assert_eq!(CellValue::Number(12.5).display_string(), "12.5");
        assert_eq!(CellValue::Number(-7.0).display_string(), "-7");
    }

    #[test]
    fn test_row_access_normalizes_both_sides() {
        let row = RawRow::new().with("Профиль /   Доп. Элементы", "стекло");
        assert_eq!(row.display_string(columns::EXTRA_COMPONENT), "стекло");
        assert_eq!(row.display_string("Профиль / Доп.    Элементы"), "стекло");
    }

    #[test]
    fn test_missing_column_is_empty_string() {
        let row = RawRow::new();
        assert_eq!(row.display_string(columns::CLIENT), "");
        assert!(row.get(columns::CLIENT).is_none());
    }
}
