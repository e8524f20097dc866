//! CSV loading.

use std::path::Path;

use tracing::info;

use crate::error::DatasetError;
use crate::models::row::{normalize_column, CellValue, RawRow};

use super::{DataLoader, Dataset};

/// Loads a comma-separated export of the cutting sheet. The first record is
/// the header; all cells load as text, which the per-field rules parse as
/// needed.
#[derive(Debug, Clone, Default)]
pub struct CsvDataLoader;

impl CsvDataLoader {
    pub fn new() -> Self {
        Self
    }
}

impl DataLoader for CsvDataLoader {
    fn load(&self, path: &Path) -> Result<Dataset, DatasetError> {
        if !path.exists() {
            return Err(DatasetError::Unavailable {
                path: path.to_path_buf(),
            });
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|e| DatasetError::Read(e.to_string()))?;

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| DatasetError::Read(e.to_string()))?
            .iter()
            .map(normalize_column)
            .collect();
        if headers.is_empty() {
            return Err(DatasetError::NoHeader);
        }

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| DatasetError::Read(e.to_string()))?;
            let mut row = RawRow::new();
            for (header, field) in headers.iter().zip(record.iter()) {
                let value = if field.is_empty() {
                    CellValue::Empty
                } else {
                    CellValue::Text(field.to_string())
                };
                row.insert(header, value);
            }
            rows.push(row);
        }

        info!(
            path = %path.display(),
            rows = rows.len(),
            columns = headers.len(),
            "loaded csv"
        );

        Ok(Dataset::new(headers, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::row::columns;
    use crate::order::OrderLookup;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_sheet(content: &str) -> tempfile::TempPath {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.into_temp_path()
    }

    #[test]
    fn test_load_and_lookup() {
        let path = write_sheet(
            "№ Заказа,Клиент,Наименование,Корпус,Профиль /    Доп. Элементы,Фасад,\"ВЕС, КГ\"\n\
             101,Мебель-Сити,Шкаф 600x720x450,Белый 16/Дуб 18,-,МДФ,12.5\n\
             102,ИП Иванов,Пенал,Венге,стекло,-,\n",
        );

        let dataset = CsvDataLoader::new().load(&path).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.headers()[4], columns::EXTRA_COMPONENT);

        let record = OrderLookup::new(&dataset).find("102").unwrap();
        assert_eq!(record.client, "ИП Иванов");
        assert_eq!(record.item_name, "Пенал");
        assert_eq!(record.extra_component, Some("стекло".to_string()));
        assert_eq!(record.facade, None);
        assert_eq!(record.weight, None);
    }

    #[test]
    fn test_short_records_leave_trailing_columns_absent() {
        let path = write_sheet("№ Заказа,Клиент,Наименование\n101,Клиент А\n");

        let dataset = CsvDataLoader::new().load(&path).unwrap();
        let row = &dataset.rows()[0];
        assert_eq!(row.display_string(columns::NAME), "");
        assert_eq!(row.display_string(columns::CLIENT), "Клиент А");
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let err = CsvDataLoader::new()
            .load(Path::new("/nonexistent/orders.csv"))
            .unwrap_err();
        assert!(matches!(err, DatasetError::Unavailable { .. }));
    }
}
