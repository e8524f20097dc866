//! Per-field extraction rules for cutting-sheet rows.
//!
//! Every rule here is total: absent columns, wrong cell types, and
//! unparseable text never raise, they yield the field's documented
//! default or absence value.

pub mod carcase;
pub mod description;
pub mod patterns;
pub mod weight;

pub use carcase::extract_carcase;
pub use description::{parse_product_description, ProductDescription};
pub use weight::{parse_weight, parse_weight_text};

/// Normalize an optional passthrough cell: `"-"` and `""` mean absent.
pub fn optional_field(value: String) -> Option<String> {
    match value.as_str() {
        "-" | "" => None,
        _ => Some(value),
    }
}
