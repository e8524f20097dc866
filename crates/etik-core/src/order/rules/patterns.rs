//! Common regex patterns for product description parsing.
//!
//! The separator class covers every glyph the sheet is typed with for the
//! "×" of a dimension phrase: Latin x/X, Cyrillic х/Х, the asterisk, and
//! the real multiplication sign.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Shortest prefix up to the first integer that is immediately followed
    // by a separator glyph. Group 1 is the item name, untrimmed.
    pub static ref ITEM_NAME_PREFIX: Regex = Regex::new(
        r"^(.*?)(\d+)[xхХX*×]"
    ).unwrap();

    // Full dimension phrase: three integers joined by separator glyphs,
    // optionally padded with whitespace. May occur anywhere in the text.
    pub static ref DIMENSION_PHRASE: Regex = Regex::new(
        r"(\d+)\s*[xхХX*×]\s*(\d+)\s*[xхХX*×]\s*(\d+)"
    ).unwrap();

    // Leading maximal run of non-digit characters of a carcase part.
    pub static ref LEADING_NON_DIGIT: Regex = Regex::new(
        r"^\D+"
    ).unwrap();
}
