//! # Skincare Ingredient Analyzer
//!
//! Matches free-form skincare ingredient lists against a reference database,
//! tolerating typos and label noise, and produces a per-ingredient
//! function and risk report.

pub mod analysis;
pub mod config;
pub mod errors;
pub mod export;
pub mod localization;
pub mod matcher;
pub mod reference_store;
pub mod report;
pub mod similarity;
pub mod text_processing;
pub mod ui_builder;

// Re-export types for easier access
pub use analysis::{analyze, AnalysisOptions, AnalysisOutput, AnalysisRequest};
pub use errors::AnalyzerError;
pub use matcher::{MatchOutcome, Matcher, MatcherConfig, Suggestion};
pub use reference_store::{ReferenceEntry, ReferenceStore, RiskTier};
pub use report::{AnalysisRecord, ReportSummary, UnresolvedPolicy};
