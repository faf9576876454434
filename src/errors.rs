//! # Analyzer Error Types Module
//!
//! This module defines the error type shared by the reference store, the matcher,
//! the analysis pipeline and the CSV export.

/// Custom error types for ingredient analysis
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyzerError {
    /// Reference data source missing, unreadable, malformed or missing required columns
    DataLoad(String),
    /// Reference store loaded but holds no entries
    NoReferenceData,
    /// Request carried no non-empty ingredient
    NoInput,
    /// Report serialization or parsing errors
    Export(String),
}

impl std::fmt::Display for AnalyzerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalyzerError::DataLoad(msg) => write!(f, "Data load error: {msg}"),
            AnalyzerError::NoReferenceData => {
                write!(f, "No reference data: the ingredient database is empty")
            }
            AnalyzerError::NoInput => write!(f, "No input: provide at least one ingredient"),
            AnalyzerError::Export(msg) => write!(f, "Export error: {msg}"),
        }
    }
}

impl std::error::Error for AnalyzerError {}

impl From<std::io::Error> for AnalyzerError {
    fn from(err: std::io::Error) -> Self {
        AnalyzerError::Export(err.to_string())
    }
}

impl From<csv::Error> for AnalyzerError {
    fn from(err: csv::Error) -> Self {
        AnalyzerError::Export(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = AnalyzerError::DataLoad("missing column 'Risk Level'".to_string());
        assert_eq!(err.to_string(), "Data load error: missing column 'Risk Level'");
        assert!(AnalyzerError::NoReferenceData.to_string().contains("empty"));
        assert!(AnalyzerError::NoInput.to_string().starts_with("No input"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err: AnalyzerError = io.into();
        assert_eq!(err, AnalyzerError::Export("disk full".to_string()));
    }
}
