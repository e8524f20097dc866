//! Row-to-record extraction.

use tracing::debug;

use crate::models::order::OrderRecord;
use crate::models::row::{columns, RawRow};

use super::rules::{extract_carcase, optional_field, parse_product_description, parse_weight};

/// Converts one raw row into one [`OrderRecord`] by applying independent,
/// per-field extraction rules.
///
/// A pure function over its input: no rule raises, no rule depends on
/// another except that `item_name` and `dimensions` both derive from the
/// same description text.
#[derive(Debug, Clone, Default)]
pub struct RecordExtractor;

impl RecordExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract all fields of a row.
    pub fn extract(&self, row: &RawRow) -> OrderRecord {
        let full_name = self.extract_full_name(row);
        let description = parse_product_description(&full_name);

        let record = OrderRecord {
            store_application_number: self.extract_store_application(row),
            client: self.extract_client(row),
            item_name: description.name,
            dimensions: description.dimensions,
            carcase: self.extract_carcase(row),
            extra_component: self.extract_extra_component(row),
            facade: self.extract_facade(row),
            weight: self.extract_weight(row),
            full_name,
        };

        debug!(
            item_name = %record.item_name,
            has_dimensions = record.dimensions.is_some(),
            "extracted order record"
        );

        record
    }

    fn extract_store_application(&self, row: &RawRow) -> String {
        row.display_string(columns::STORE_APPLICATION)
    }

    fn extract_client(&self, row: &RawRow) -> String {
        row.display_string(columns::CLIENT)
    }

    fn extract_full_name(&self, row: &RawRow) -> String {
        row.display_string(columns::NAME)
    }

    fn extract_carcase(&self, row: &RawRow) -> String {
        extract_carcase(&row.display_string(columns::CARCASE))
    }

    fn extract_extra_component(&self, row: &RawRow) -> Option<String> {
        optional_field(row.display_string(columns::EXTRA_COMPONENT))
    }

    fn extract_facade(&self, row: &RawRow) -> Option<String> {
        optional_field(row.display_string(columns::FACADE))
    }

    fn extract_weight(&self, row: &RawRow) -> Option<rust_decimal::Decimal> {
        row.get(columns::WEIGHT).and_then(parse_weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::Dimensions;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn sample_row() -> RawRow {
        RawRow::new()
            .with(columns::ORDER_NUMBER, 101i64)
            .with(columns::STORE_APPLICATION, "125/3")
            .with(columns::CLIENT, "Мебель-Сити")
            .with(columns::NAME, "Шкаф 600x720x450")
            .with(columns::CARCASE, "Белый 16/Дуб 18")
            .with("Профиль /            Доп. Элементы", "-")
            .with(columns::FACADE, "МДФ Белый глянец")
            .with(columns::WEIGHT, 12.5)
    }

    #[test]
    fn test_extract_full_row() {
        let record = RecordExtractor::new().extract(&sample_row());

        assert_eq!(record.store_application_number, "125/3");
        assert_eq!(record.client, "Мебель-Сити");
        assert_eq!(record.full_name, "Шкаф 600x720x450");
        assert_eq!(record.item_name, "Шкаф");
        assert_eq!(record.dimensions, Some(Dimensions::new(600, 720, 450)));
        assert_eq!(record.carcase, "Белый/Дуб");
        assert_eq!(record.extra_component, None);
        assert_eq!(record.facade, Some("МДФ Белый глянец".to_string()));
        assert_eq!(record.weight, Some(Decimal::from_str("12.5").unwrap()));
    }

    #[test]
    fn test_empty_row_yields_all_defaults() {
        let record = RecordExtractor::new().extract(&RawRow::new());

        assert_eq!(record.store_application_number, "");
        assert_eq!(record.client, "");
        assert_eq!(record.full_name, "");
        assert_eq!(record.item_name, "");
        assert_eq!(record.dimensions, None);
        assert_eq!(record.carcase, "");
        assert_eq!(record.extra_component, None);
        assert_eq!(record.facade, None);
        assert_eq!(record.weight, None);
    }

    #[test]
    fn test_item_name_falls_back_to_full_name() {
        let row = RawRow::new().with(columns::NAME, "Пенал");
        let record = RecordExtractor::new().extract(&row);

        assert_eq!(record.item_name, "Пенал");
        assert_eq!(record.full_name, "Пенал");
        assert_eq!(record.dimensions, None);
    }

    #[test]
    fn test_numeric_store_application_stringifies() {
        let row = RawRow::new().with(columns::STORE_APPLICATION, 125i64);
        let record = RecordExtractor::new().extract(&row);
        assert_eq!(record.store_application_number, "125");
    }

    #[test]
    fn test_textual_weight_is_parsed() {
        let row = RawRow::new().with(columns::WEIGHT, "12,5");
        let record = RecordExtractor::new().extract(&row);
        assert_eq!(record.weight, Some(Decimal::from_str("12.5").unwrap()));

        let row = RawRow::new().with(columns::WEIGHT, "abc");
        let record = RecordExtractor::new().extract(&row);
        assert_eq!(record.weight, None);
    }
}
