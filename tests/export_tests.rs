//! # Export Tests
//!
//! CSV export of analysis reports, including file output and round-trips of
//! real pipeline results.

#[cfg(test)]
mod tests {
    use skincare_ingredients::analysis::{analyze, AnalysisOptions, AnalysisRequest};
    use skincare_ingredients::errors::AnalyzerError;
    use skincare_ingredients::export::{
        from_csv_str, read_csv, to_csv_string, write_csv_file, EXPORT_HEADER,
    };
    use skincare_ingredients::reference_store::ReferenceStore;
    use std::fs;
    use tempfile::NamedTempFile;

    const DATABASE: &str = include_str!("../data/ingredient_database.csv");

    fn analyzed_records() -> Vec<skincare_ingredients::AnalysisRecord> {
        let store = ReferenceStore::from_reader(DATABASE.as_bytes()).unwrap();
        let request =
            AnalysisRequest::from_text("Aqua (Water), Salicylic Acid, Fragrance, Xyzzplorq");
        analyze(&request, &store, &AnalysisOptions::default())
            .unwrap()
            .records
    }

    #[test]
    fn test_round_trip_of_pipeline_output() {
        let records = analyzed_records();
        let csv = to_csv_string(&records).unwrap();

        assert!(csv.starts_with(EXPORT_HEADER));
        assert_eq!(from_csv_str(&csv).unwrap(), records);
    }

    #[test]
    fn test_quoted_description_survives() {
        let records = analyzed_records();
        let csv = to_csv_string(&records).unwrap();

        // The Salicylic Acid description contains a comma and must be quoted
        assert!(csv.contains("\"Oil-soluble beta hydroxy acid that unclogs pores, but can irritate sensitive skin.\""));
        assert_eq!(
            from_csv_str(&csv).unwrap()[1].description,
            "Oil-soluble beta hydroxy acid that unclogs pores, but can irritate sensitive skin."
        );
    }

    #[test]
    fn test_write_and_read_file() {
        let records = analyzed_records();
        let temp_file = NamedTempFile::new().unwrap();

        write_csv_file(&records, temp_file.path()).unwrap();

        let written = fs::read_to_string(temp_file.path()).unwrap();
        assert_eq!(written.lines().count(), records.len() + 1);

        let file = fs::File::open(temp_file.path()).unwrap();
        assert_eq!(read_csv(file).unwrap(), records);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.csv");

        let err = write_csv_file(&analyzed_records(), &path).unwrap_err();
        assert!(matches!(err, AnalyzerError::Export(_)));
    }
}
