//! Fixed label-sheet geometry, carried as data for an external renderer.
//!
//! One label occupies a 17-row block; labels stack vertically, each block
//! shifted by `rows_per_label`. The renderer owns cell styling; this
//! module only states where things go.

use serde::{Deserialize, Serialize};

/// A static caption printed on every label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caption {
    /// Anchor cell within the label block (first block coordinates).
    pub cell: String,
    /// Caption text.
    pub text: String,
}

/// Geometry of one label block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelLayout {
    /// Rows occupied by one label, including its trailing spacer row.
    pub rows_per_label: u32,

    /// Height of each row within a block, keyed by block-relative row.
    pub row_heights: Vec<(u32, f64)>,

    /// Column widths, shared by every block on the sheet.
    pub column_widths: Vec<(String, f64)>,

    /// Merge ranges within a block (first block coordinates).
    pub merge_ranges: Vec<String>,

    /// Static captions within a block.
    pub captions: Vec<Caption>,
}

impl Default for LabelLayout {
    fn default() -> Self {
        let narrow = ["A", "B", "C", "D", "E"];
        let wide = [
            "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S",
        ];

        Self {
            rows_per_label: 17,
            row_heights: (1..=17).map(|r| (r, 15.0)).collect(),
            column_widths: narrow
                .iter()
                .map(|c| (c.to_string(), 4.0))
                .chain(wide.iter().map(|c| (c.to_string(), 12.0)))
                .collect(),
            merge_ranges: [
                "A1:E8", "A9:B12", "C9:E12", "A13:E16", "F1:L4", "M1:O4", "P1:R4", "S1:S16",
                "F5:I8", "J5:L8", "M5:O8", "P5:R8", "F9:I12", "J9:L12", "M9:O12", "P9:R12",
                "F13:G14", "H13:I14", "J13:K14", "F15:G16", "H15:I16", "J15:K16", "L13:M16",
                "N13:N16", "O13:O16", "P13:R16",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            captions: [
                ("A13", "ГОСТ 16371-2014"),
                ("F5", "Наименование упаковки"),
                ("J5", "Цвет"),
                ("M5", "ЗАКАЗЧИК"),
                ("P1", "ВСЕГО УПАКОВОК"),
                ("P9", "№ УПАКОВКИ"),
                ("F13", "ВЫСОТА"),
                ("H13", "ШИРИНА"),
                ("J13", "ГЛУБИНА"),
                ("L13", "ВЕС"),
                ("O13", "КГ"),
            ]
            .iter()
            .map(|(cell, text)| Caption {
                cell: cell.to_string(),
                text: text.to_string(),
            })
            .collect(),
        }
    }
}

impl LabelLayout {
    /// First sheet row of the `index`-th label block (0-based index).
    pub fn block_start_row(&self, index: u32) -> u32 {
        1 + index * self.rows_per_label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_stack_vertically() {
        let layout = LabelLayout::default();
        assert_eq!(layout.block_start_row(0), 1);
        assert_eq!(layout.block_start_row(1), 18);
        assert_eq!(layout.block_start_row(2), 35);
    }

    #[test]
    fn test_default_geometry() {
        let layout = LabelLayout::default();
        assert_eq!(layout.rows_per_label, 17);
        assert_eq!(layout.row_heights.len(), 17);
        assert_eq!(layout.column_widths.len(), 19);
        assert_eq!(layout.merge_ranges.len(), 26);
        assert!(layout
            .captions
            .iter()
            .any(|c| c.cell == "A13" && c.text == "ГОСТ 16371-2014"));
    }
}
