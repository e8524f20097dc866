//! Product description parsing: item name and dimension phrase.
//!
//! The name/dimension split is the one piece of real grammar in the sheet,
//! so it lives behind a single function instead of being inlined at call
//! sites.

use crate::models::order::Dimensions;

use super::patterns::{DIMENSION_PHRASE, ITEM_NAME_PREFIX};

/// Parsed form of the free-text product description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDescription {
    /// Text preceding the first dimension token, trimmed; the full input
    /// when no dimension token exists.
    pub name: String,
    /// Width × height × depth in mm, when a full dimension phrase exists.
    pub dimensions: Option<Dimensions>,
}

/// Split a product description into item name and dimensions.
///
/// Both parts degrade independently: a text with a dimension token but no
/// full three-part phrase still gets its name stripped, and a text with no
/// dimension token at all keeps its full text as the name.
pub fn parse_product_description(text: &str) -> ProductDescription {
    let name = match ITEM_NAME_PREFIX.captures(text) {
        Some(caps) => caps[1].trim().to_string(),
        None => text.to_string(),
    };

    let dimensions = DIMENSION_PHRASE.captures(text).and_then(|caps| {
        let width = caps[1].parse().ok()?;
        let height = caps[2].parse().ok()?;
        let depth = caps[3].parse().ok()?;
        Some(Dimensions::new(width, height, depth))
    });

    ProductDescription { name, dimensions }
}
