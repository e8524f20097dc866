//! Carcase finish extraction.

use super::patterns::LEADING_NON_DIGIT;

/// Extract the set of finish names from a composite carcase cell.
///
/// The cell is slash-separated, each part a finish name optionally followed
/// by a board thickness ("Белый 16/Дуб 18"). Only the leading non-digit run
/// of each part survives. Duplicates collapse case-sensitively, keeping the
/// first-seen order so the output is reproducible. Parts with no leading
/// non-digit run are skipped.
pub fn extract_carcase(raw: &str) -> String {
    let mut tokens: Vec<String> = Vec::new();

    for part in raw.split('/') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if let Some(m) = LEADING_NON_DIGIT.find(part) {
            let token = m.as_str().trim();
            if !token.is_empty() && !tokens.iter().any(|t| t == token) {
                tokens.push(token.to_string());
            }
        }
    }

    tokens.join("/")
}
