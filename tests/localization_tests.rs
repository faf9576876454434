//! # Localization Tests
//!
//! This module contains unit tests for the localization functionality,
//! testing message retrieval and formatting with various edge cases.

use skincare_ingredients::localization::LocalizationManager;
use std::collections::HashMap;

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_localization() -> LocalizationManager {
        LocalizationManager::new().expect("Failed to create localization manager")
    }

    #[test]
    fn test_get_message_existing_key() {
        let manager = setup_localization();

        let message = manager.t("report-title", "en");
        assert_eq!(message, "Full Analysis Table");
    }

    #[test]
    fn test_get_message_nonexistent_key() {
        let manager = setup_localization();

        let message = manager.get_message_in_language("nonexistent-key", "en", None);
        assert!(message.starts_with("Missing translation:"));
    }

    #[test]
    fn test_get_message_unsupported_language() {
        let manager = setup_localization();

        let message = manager.t("report-title", "unsupported");
        assert_eq!(message, "Full Analysis Table");
    }

    #[test]
    fn test_get_message_with_args() {
        let manager = setup_localization();

        let mut args = HashMap::new();
        args.insert("count", "5");

        let message = manager.get_message_in_language("analysis-complete", "en", Some(&args));
        assert_eq!(message, "Analyzed 5 ingredients.");
    }

    #[test]
    fn test_get_message_missing_args() {
        let manager = setup_localization();

        // Missing arguments are reported but still produce text
        let message = manager.get_message_in_language("analysis-complete", "en", None);
        assert!(!message.is_empty());
    }

    #[test]
    fn test_french_localization() {
        let manager = setup_localization();

        let message = manager.t("no-suggestions", "fr");
        let english_message = manager.t("no-suggestions", "en");
        assert!(!message.is_empty());
        assert_ne!(message, english_message);
    }

    #[test]
    fn test_every_english_key_translated() {
        let manager = setup_localization();
        let keys = [
            "analysis-complete",
            "report-title",
            "function-breakdown",
            "suggestion-header",
            "suggestion-notice",
            "no-suggestions",
            "high-risk-warning",
            "known-ingredients",
            "export-complete",
        ];

        for key in keys {
            let message = manager.t(key, "fr");
            assert!(
                !message.starts_with("Missing"),
                "French translation missing for '{}'",
                key
            );
        }
    }
}
