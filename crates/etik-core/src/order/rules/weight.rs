//! Weight cell parsing.

use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::models::row::CellValue;

/// Parse the weight cell into kilograms.
///
/// Numeric cells convert directly; textual cells are trimmed and parsed
/// with either a comma or a dot as the decimal separator, matching how the
/// sheet is actually typed. Anything else is absent.
pub fn parse_weight(cell: &CellValue) -> Option<Decimal> {
    match cell {
        CellValue::Number(n) => Decimal::from_f64(*n),
        CellValue::Text(s) => parse_weight_text(s),
        CellValue::Empty => None,
    }
}

/// Parse a typed weight value.
pub fn parse_weight_text(s: &str) -> Option<Decimal> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(&trimmed.replace(',', ".")).ok()
}
