#[cfg(test)]
mod tests {
    use skincare_ingredients::text_processing::{combine_inputs, normalize, normalize_selections};

    #[test]
    fn test_real_label_text() {
        let label = "Aqua (Water), Glycerin, Niacinamide (Vitamin B3), Tocopherol (Vitamin E), \
                     Parfum (Fragrance), Phenoxyethanol";

        assert_eq!(
            normalize(label),
            vec![
                "Aqua",
                "Glycerin",
                "Niacinamide",
                "Tocopherol",
                "Parfum",
                "Phenoxyethanol"
            ]
        );
    }

    #[test]
    fn test_whitespace_noise() {
        let text = "\n  Aqua ,\tGlycerin\n,   Salicylic   Acid  ";

        // Inner whitespace is kept as typed; only the ends are trimmed
        assert_eq!(normalize(text), vec!["Aqua", "Glycerin", "Salicylic   Acid"]);
    }

    #[test]
    fn test_idempotence_on_clean_lists() {
        let clean_lists = vec![
            vec!["Aqua"],
            vec!["Aqua", "Glycerin", "Salicylic Acid"],
            vec!["Retinol", "Retinol"],
        ];

        for list in clean_lists {
            let joined = list.join(", ");
            assert_eq!(normalize(&joined), list, "normalize changed '{}'", joined);
        }
    }

    #[test]
    fn test_parenthetical_only_pieces_removed() {
        assert_eq!(
            normalize("(Organic), Aqua, (and), Glycerin"),
            vec!["Aqua", "Glycerin"]
        );
    }

    #[test]
    fn test_parenthetical_inside_name() {
        assert_eq!(
            normalize("Butyrospermum Parkii (Shea) Butter"),
            vec!["Butyrospermum Parkii Butter"]
        );
    }

    #[test]
    fn test_selections_not_reparsed() {
        // Selections are trusted: commas and parentheses pass through
        let selections = vec!["Aqua (Water)", "Glycerin, USP"];
        assert_eq!(normalize_selections(&selections), selections);
    }

    #[test]
    fn test_combined_ordering() {
        let selections = vec!["Zinc Oxide".to_string(), " ".to_string()];
        let candidates = combine_inputs(&selections, Some("Aqua, Zinc Oxide"));

        assert_eq!(candidates, vec!["Zinc Oxide", "Aqua", "Zinc Oxide"]);
    }
}
