//! Normalized order record extracted from one cutting-sheet row.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Package dimensions in millimeters, in the textual order of the source
/// dimension phrase: width × height × depth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in mm.
    pub width: u32,
    /// Height in mm.
    pub height: u32,
    /// Depth in mm.
    pub depth: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32, depth: u32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }
}

/// The normalized result of extracting one order row.
///
/// Created once per lookup and immutable thereafter; a user-editable form
/// may override individual fields through
/// [`FieldOverrides`](crate::label::FieldOverrides) before label planning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Store / application number; may be empty.
    pub store_application_number: String,

    /// Client name; may be empty.
    pub client: String,

    /// Raw, untouched product description.
    pub full_name: String,

    /// Product description with the trailing dimension phrase stripped.
    /// Equals `full_name` when no dimension phrase is found.
    pub item_name: String,

    /// Parsed dimensions; `None` when `full_name` carries no dimension phrase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,

    /// Slash-joined set of deduplicated carcase finish tokens.
    pub carcase: String,

    /// Extra component; `None` when the source cell was `"-"` or empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_component: Option<String>,

    /// Facade material; same absence rule as `extra_component`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facade: Option<String>,

    /// Package weight in kg; `None` when the source cell is not a number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Decimal>,
}

impl OrderRecord {
    /// Dimensions with the absent case flattened to zeroes, the form the
    /// label renderer consumes.
    pub fn dimensions_or_zero(&self) -> Dimensions {
        self.dimensions.unwrap_or_default()
    }
}
