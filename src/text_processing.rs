//! # Text Processing Module
//!
//! This module turns raw user input into the ordered list of candidate
//! ingredient names handed to the matcher.
//!
//! ## Features
//!
//! - Comma-separated ingredient lists as printed on product labels
//! - Removal of parenthetical glosses such as `Aqua (Water)`
//! - Discrete pre-selected ingredients, passed through as-is
//! - Order and duplicates preserved; empty pieces dropped

use lazy_static::lazy_static;
use log::{debug, info, trace};
use regex::Regex;

// A parenthetical run from `(` to the next `)`, with the whitespace before it
const PARENTHETICAL_PATTERN: &str = r"\s*\([^)]*\)";

// Lazy static regex for the parenthetical pattern to avoid recompilation
lazy_static! {
    static ref PARENTHETICAL_REGEX: Regex =
        Regex::new(PARENTHETICAL_PATTERN).expect("Parenthetical pattern should be valid");
}

/// Split a raw comma-separated ingredient list into clean candidates
///
/// Each piece has its parenthetical annotations and surrounding whitespace
/// removed. Pieces that end up empty are discarded. An unmatched `(` is kept.
///
/// # Examples
///
/// ```rust
/// use skincare_ingredients::text_processing::normalize;
///
/// let candidates = normalize("Aqua (Water), Glycerin, Salicylic Acid");
/// assert_eq!(candidates, vec!["Aqua", "Glycerin", "Salicylic Acid"]);
///
/// // Empty segments and whitespace noise disappear
/// assert_eq!(normalize(" Niacinamide ,, (Vitamin B3) ,"), vec!["Niacinamide"]);
/// ```
pub fn normalize(raw_text: &str) -> Vec<String> {
    debug!(
        "Normalizing raw ingredient text with {} comma-separated pieces",
        raw_text.split(',').count()
    );

    let candidates: Vec<String> = raw_text
        .split(',')
        .filter_map(|piece| {
            let cleaned = strip_parentheticals(piece);
            let cleaned = cleaned.trim();
            trace!("Normalized piece '{}' -> '{}'", piece, cleaned);
            if cleaned.is_empty() {
                None
            } else {
                Some(cleaned.to_string())
            }
        })
        .collect();

    info!("Normalized raw text into {} candidates", candidates.len());
    candidates
}

/// Clean a list of pre-selected ingredients
///
/// Selections come from the known-ingredient list and are treated as clean:
/// only surrounding whitespace is trimmed and blank entries are dropped.
pub fn normalize_selections<S: AsRef<str>>(selections: &[S]) -> Vec<String> {
    selections
        .iter()
        .map(|selection| selection.as_ref().trim())
        .filter(|selection| !selection.is_empty())
        .map(str::to_string)
        .collect()
}

/// Merge selections and manually typed text into one candidate list
///
/// Selections always come first, followed by the candidates parsed from the
/// raw text.
///
/// # Examples
///
/// ```rust
/// use skincare_ingredients::text_processing::combine_inputs;
///
/// let candidates = combine_inputs(&["Retinol"], Some("Aqua, Glycerin"));
/// assert_eq!(candidates, vec!["Retinol", "Aqua", "Glycerin"]);
/// ```
pub fn combine_inputs<S: AsRef<str>>(selections: &[S], raw_text: Option<&str>) -> Vec<String> {
    let mut candidates = normalize_selections(selections);
    if let Some(raw_text) = raw_text {
        candidates.extend(normalize(raw_text));
    }
    debug!("Combined input yields {} candidates", candidates.len());
    candidates
}

/// Remove every parenthetical run from a single piece of text
fn strip_parentheticals(piece: &str) -> String {
    PARENTHETICAL_REGEX.replace_all(piece, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_with_parentheses() {
        let candidates = normalize("Aqua (Water), Glycerin, Salicylic Acid");
        assert_eq!(candidates, vec!["Aqua", "Glycerin", "Salicylic Acid"]);
    }

    #[test]
    fn test_clean_input_unchanged() {
        let clean = vec!["Aqua", "Glycerin", "Salicylic Acid"];
        assert_eq!(normalize(&clean.join(",")), clean);

        // Idempotent on its own output
        let once = normalize("Aqua (Water),  Glycerin ,Tocopherol (Vitamin E)");
        assert_eq!(normalize(&once.join(",")), once);
    }

    #[test]
    fn test_empty_pieces_dropped() {
        assert!(normalize("").is_empty());
        assert!(normalize(" , ,, ").is_empty());
        assert!(normalize("(Water)").is_empty());
        assert_eq!(normalize("Aqua,,Glycerin,"), vec!["Aqua", "Glycerin"]);
    }

    #[test]
    fn test_duplicates_preserved() {
        assert_eq!(
            normalize("Glycerin, Aqua, Glycerin"),
            vec!["Glycerin", "Aqua", "Glycerin"]
        );
    }

    #[test]
    fn test_multiple_parentheticals() {
        assert_eq!(
            normalize("Tocopherol (Vitamin E) (Antioxidant) Acetate"),
            vec!["Tocopherol Acetate"]
        );
    }

    #[test]
    fn test_unmatched_parenthesis_kept() {
        assert_eq!(normalize("Aqua (Water"), vec!["Aqua (Water"]);
    }

    #[test]
    fn test_nested_parentheses_strip_to_first_close() {
        assert_eq!(normalize("Extract (Leaf (Dried) Oil)"), vec!["Extract Oil)"]);
    }

    #[test]
    fn test_normalize_selections() {
        let selections = vec!["Retinol", "  ", "", " Niacinamide "];
        assert_eq!(
            normalize_selections(&selections),
            vec!["Retinol", "Niacinamide"]
        );
    }

    #[test]
    fn test_combine_inputs_orders_selections_first() {
        let selections = vec!["Retinol".to_string()];
        let candidates = combine_inputs(&selections, Some("Aqua (Water), Retinol"));
        assert_eq!(candidates, vec!["Retinol", "Aqua", "Retinol"]);

        let none: [&str; 0] = [];
        assert_eq!(combine_inputs(&none, Some("Aqua")), vec!["Aqua"]);
        assert_eq!(combine_inputs(&["Aqua"], None), vec!["Aqua"]);
    }
}
