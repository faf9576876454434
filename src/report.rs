//! # Report Module
//!
//! Builds the per-ingredient analysis records handed to the presentation
//! layer, and the summary figures shown next to them (risk distribution,
//! function breakdown, high-risk alert).

use crate::matcher::MatchOutcome;
use crate::reference_store::{ReferenceStore, RiskTier};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Function label used for ingredients missing from the database
pub const UNKNOWN_FUNCTION: &str = "Unknown";
/// Description used for ingredients missing from the database
pub const NOT_FOUND_DESCRIPTION: &str = "Not found in database.";

/// One row of the analysis report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    #[serde(rename = "Ingredient")]
    pub ingredient: String,
    #[serde(rename = "Function")]
    pub function: String,
    #[serde(rename = "Risk Level")]
    pub risk_tier: RiskTier,
    #[serde(rename = "Description")]
    pub description: String,
}

impl AnalysisRecord {
    /// Placeholder for an ingredient with no reference entry
    pub fn unknown(ingredient: &str) -> Self {
        Self {
            ingredient: ingredient.to_string(),
            function: UNKNOWN_FUNCTION.to_string(),
            risk_tier: RiskTier::Unknown,
            description: NOT_FOUND_DESCRIPTION.to_string(),
        }
    }
}

/// What to do with candidates that only produced a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnresolvedPolicy {
    /// Emit an `Unknown` placeholder row at the candidate's position
    #[default]
    Placeholder,
    /// Leave the candidate out of the report
    Omit,
}

impl std::str::FromStr for UnresolvedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "placeholder" => Ok(UnresolvedPolicy::Placeholder),
            "omit" => Ok(UnresolvedPolicy::Omit),
            other => Err(format!(
                "unknown unresolved policy '{other}' (expected 'placeholder' or 'omit')"
            )),
        }
    }
}

/// Build one record per resolved name, in order
///
/// Names missing from the store should not happen since the matcher only emits
/// known names; they are logged and reported as `Unknown` placeholders.
pub fn build_report<S: AsRef<str>>(
    resolved_names: &[S],
    store: &ReferenceStore,
) -> Vec<AnalysisRecord> {
    resolved_names
        .iter()
        .map(|name| record_for(name.as_ref(), store))
        .collect()
}

/// Build the report from the full outcome list, applying `policy` to suggestions
pub fn build_report_from_outcomes(
    outcomes: &[MatchOutcome],
    store: &ReferenceStore,
    policy: UnresolvedPolicy,
) -> Vec<AnalysisRecord> {
    outcomes
        .iter()
        .filter_map(|outcome| match outcome {
            MatchOutcome::Resolved { canonical_name } => Some(record_for(canonical_name, store)),
            MatchOutcome::Suggested(suggestion) => match policy {
                UnresolvedPolicy::Placeholder => {
                    debug!(
                        "Reporting unresolved '{}' as unknown",
                        suggestion.original_text
                    );
                    Some(AnalysisRecord::unknown(&suggestion.original_text))
                }
                UnresolvedPolicy::Omit => None,
            },
        })
        .collect()
}

fn record_for(name: &str, store: &ReferenceStore) -> AnalysisRecord {
    match store.lookup_exact(name) {
        Some(entry) => AnalysisRecord {
            ingredient: entry.name.clone(),
            function: entry.function.clone(),
            risk_tier: entry.risk_tier,
            description: entry.description.clone(),
        },
        None => {
            warn!(
                "Resolved ingredient '{}' has no reference entry, reporting as unknown",
                name
            );
            AnalysisRecord::unknown(name)
        }
    }
}

/// Number of records in one risk tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCount {
    pub tier: RiskTier,
    pub count: usize,
}

/// Number of records sharing one function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionCount {
    pub function: String,
    pub count: usize,
}

/// Aggregate figures over a report
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total: usize,
    /// Counts for every tier, in `Low, Medium, High, Unknown` order
    pub risk_counts: Vec<TierCount>,
    /// Counts per function, most frequent first, ties in order of first appearance
    pub functions: Vec<FunctionCount>,
    /// High-risk ingredient names in report order
    pub high_risk: Vec<String>,
}

impl ReportSummary {
    pub fn from_records(records: &[AnalysisRecord]) -> Self {
        let risk_counts = RiskTier::ALL
            .iter()
            .map(|&tier| TierCount {
                tier,
                count: records.iter().filter(|r| r.risk_tier == tier).count(),
            })
            .collect();

        let mut functions: Vec<FunctionCount> = Vec::new();
        for record in records {
            match functions.iter_mut().find(|f| f.function == record.function) {
                Some(existing) => existing.count += 1,
                None => functions.push(FunctionCount {
                    function: record.function.clone(),
                    count: 1,
                }),
            }
        }
        // Stable sort keeps first-appearance order among equal counts
        functions.sort_by(|a, b| b.count.cmp(&a.count));

        let high_risk = records
            .iter()
            .filter(|r| r.risk_tier == RiskTier::High)
            .map(|r| r.ingredient.clone())
            .collect();

        Self {
            total: records.len(),
            risk_counts,
            functions,
            high_risk,
        }
    }

    pub fn count_for(&self, tier: RiskTier) -> usize {
        self.risk_counts
            .iter()
            .find(|c| c.tier == tier)
            .map_or(0, |c| c.count)
    }

    pub fn has_high_risk(&self) -> bool {
        !self.high_risk.is_empty()
    }
}
