//! # Analysis Pipeline
//!
//! Request-scoped entry point running normalization, matching and report
//! assembly against a shared, read-only reference store.
//!
//! ## Usage
//!
//! ```rust
//! use skincare_ingredients::analysis::{analyze, AnalysisOptions, AnalysisRequest};
//! use skincare_ingredients::reference_store::ReferenceStore;
//!
//! let csv = "Ingredient,Function,Risk Level,Description\n\
//!            Aqua,Solvent,low,Water\n\
//!            Glycerin,Humectant,low,Draws moisture into the skin\n";
//! let store = ReferenceStore::from_reader(csv.as_bytes())?;
//!
//! let request = AnalysisRequest::from_text("Aqua (Water), Glycrin");
//! let output = analyze(&request, &store, &AnalysisOptions::default())?;
//!
//! assert_eq!(output.records.len(), 2);
//! assert_eq!(output.records[1].ingredient, "Glycerin");
//! assert!(output.suggestions.is_empty());
//! # Ok::<(), skincare_ingredients::errors::AnalyzerError>(())
//! ```

use crate::errors::AnalyzerError;
use crate::matcher::{Matcher, MatcherConfig, Suggestion};
use crate::reference_store::ReferenceStore;
use crate::report::{build_report_from_outcomes, AnalysisRecord, ReportSummary, UnresolvedPolicy};
use crate::text_processing::combine_inputs;
use log::info;
use serde::{Deserialize, Serialize};

/// Ingredients submitted for one analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Items picked from the known-ingredient list
    pub selections: Vec<String>,
    /// Optional manually typed, comma-separated list
    pub raw_text: Option<String>,
}

impl AnalysisRequest {
    pub fn from_text(raw_text: &str) -> Self {
        Self {
            selections: Vec::new(),
            raw_text: Some(raw_text.to_string()),
        }
    }

    pub fn from_selections<S: Into<String>>(selections: impl IntoIterator<Item = S>) -> Self {
        Self {
            selections: selections.into_iter().map(Into::into).collect(),
            raw_text: None,
        }
    }

    pub fn with_text(mut self, raw_text: &str) -> Self {
        self.raw_text = Some(raw_text.to_string());
        self
    }

    /// Candidates in analysis order: selections first, then typed entries
    pub fn candidates(&self) -> Vec<String> {
        combine_inputs(&self.selections, self.raw_text.as_deref())
    }
}

/// Options applied to every request
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnalysisOptions {
    pub matcher: MatcherConfig,
    pub unresolved: UnresolvedPolicy,
}

/// Everything the presentation layer needs for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOutput {
    /// Normalized candidates in analysis order
    pub candidates: Vec<String>,
    pub records: Vec<AnalysisRecord>,
    pub suggestions: Vec<Suggestion>,
    pub summary: ReportSummary,
}

/// Run the full pipeline for one request
///
/// # Errors
///
/// - `AnalyzerError::NoReferenceData` if the store is empty
/// - `AnalyzerError::NoInput` if the request yields no candidate
pub fn analyze(
    request: &AnalysisRequest,
    store: &ReferenceStore,
    options: &AnalysisOptions,
) -> Result<AnalysisOutput, AnalyzerError> {
    if store.is_empty() {
        return Err(AnalyzerError::NoReferenceData);
    }

    let candidates = request.candidates();
    if candidates.is_empty() {
        return Err(AnalyzerError::NoInput);
    }

    let matcher = Matcher::with_config(store, options.matcher);
    let results = matcher.resolve_all(&candidates)?;

    let records = build_report_from_outcomes(&results.outcomes, store, options.unresolved);
    let summary = ReportSummary::from_records(&records);

    info!(
        "Analyzed {} candidates: {} records, {} suggestions, {} high risk",
        candidates.len(),
        records.len(),
        results.suggestions.len(),
        summary.high_risk.len()
    );

    Ok(AnalysisOutput {
        candidates,
        records,
        suggestions: results.suggestions,
        summary,
    })
}
