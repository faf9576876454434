//! # Reference Store Tests
//!
//! Loading the reference database from files on disk, including the
//! failure modes that must stop the analyzer at startup.

#[cfg(test)]
mod tests {
    use skincare_ingredients::errors::AnalyzerError;
    use skincare_ingredients::reference_store::{ReferenceStore, RiskTier};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp_csv(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file.flush().unwrap();
        temp_file
    }

    #[test]
    fn test_load_from_file() {
        let temp_file = write_temp_csv(
            "Ingredient,Function,Risk Level,Description\n\
             Aqua,Solvent,low,Water\n\
             Retinol,Anti-aging,Medium,Vitamin A\n",
        );

        let store = ReferenceStore::load(temp_file.path()).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.lookup_exact("retinol").unwrap().risk_tier, RiskTier::Medium);
    }

    #[test]
    fn test_padded_headers_accepted() {
        let temp_file = write_temp_csv(
            " Ingredient , Function , Risk Level , Description \n\
             Aqua , Solvent , low , Water \n",
        );

        let store = ReferenceStore::load(temp_file.path()).unwrap();
        let entry = store.lookup_exact("Aqua").unwrap();

        assert_eq!(entry.name, "Aqua");
        assert_eq!(entry.function, "Solvent");
    }

    #[test]
    fn test_unknown_tiers_and_blank_fields() {
        let temp_file = write_temp_csv(
            "Ingredient,Function,Risk Level,Description\n\
             Mica,,very high,\n",
        );

        let store = ReferenceStore::load(temp_file.path()).unwrap();
        let entry = store.lookup_exact("mica").unwrap();

        assert_eq!(entry.risk_tier, RiskTier::Unknown);
        assert_eq!(entry.function, "");
        assert_eq!(entry.description, "");
    }

    #[test]
    fn test_header_only_file_is_empty_store() {
        let temp_file = write_temp_csv("Ingredient,Function,Risk Level,Description\n");

        let store = ReferenceStore::load(temp_file.path()).unwrap();
        assert!(store.is_empty());
        assert!(store.known_names().is_empty());
    }

    #[test]
    fn test_empty_file_is_data_load_error() {
        let temp_file = write_temp_csv("");

        let err = ReferenceStore::load(temp_file.path()).unwrap_err();
        assert!(matches!(err, AnalyzerError::DataLoad(_)));
    }

    #[test]
    fn test_invalid_utf8_is_data_load_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"Ingredient,Function,Risk Level,Description\n\xff\xfe,Solvent,low,Water\n")
            .unwrap();
        temp_file.flush().unwrap();

        let err = ReferenceStore::load(temp_file.path()).unwrap_err();
        assert!(matches!(err, AnalyzerError::DataLoad(_)));
    }

    #[test]
    fn test_duplicate_case_insensitive_names() {
        let temp_file = write_temp_csv(
            "Ingredient,Function,Risk Level,Description\n\
             Aqua,Solvent,low,Loaded first\n\
             AQUA,Solvent,high,Loaded second\n",
        );

        let store = ReferenceStore::load(temp_file.path()).unwrap();

        for _ in 0..3 {
            let entry = store.lookup_exact("aqua").unwrap();
            assert_eq!(entry.description, "Loaded first");
        }
        assert_eq!(store.known_names().len(), 2);
    }
}
