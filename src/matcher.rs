//! # Matcher Module
//!
//! Resolves candidate ingredient names to canonical reference names.
//!
//! ## Resolution Rules
//!
//! 1. A case-insensitive exact hit resolves immediately.
//! 2. Otherwise every known name is scored in load order and the first
//!    highest-scoring name is kept.
//! 3. A best score strictly above the threshold (default 80) resolves to that
//!    name; anything else becomes a [`Suggestion`] for the user to review.

use crate::errors::AnalyzerError;
use crate::reference_store::ReferenceStore;
use crate::similarity::{LevenshteinRatio, SimilarityScorer};
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

/// Default acceptance threshold; scores must be strictly greater
pub const DEFAULT_THRESHOLD: u8 = 80;

/// A candidate whose best match fell at or below the threshold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The candidate as the user typed it
    pub original_text: String,
    /// Closest canonical name
    pub suggested_name: String,
    /// Similarity score of the closest name (0-100)
    pub score: u8,
}

/// Result of resolving one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Resolved { canonical_name: String },
    Suggested(Suggestion),
}

/// Outcomes for a whole candidate list, split by category
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchResults {
    /// Every outcome in candidate order
    pub outcomes: Vec<MatchOutcome>,
    /// Canonical names of resolved candidates, in candidate order
    pub resolved: Vec<String>,
    /// Suggestions for unresolved candidates, in candidate order
    pub suggestions: Vec<Suggestion>,
}

/// Configuration options for matching
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatcherConfig {
    /// Fuzzy scores must be strictly greater than this value to resolve
    pub threshold: u8,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Candidate resolver bound to one reference store
pub struct Matcher<'a, S = LevenshteinRatio> {
    store: &'a ReferenceStore,
    config: MatcherConfig,
    scorer: S,
}

impl<'a> Matcher<'a, LevenshteinRatio> {
    /// Create a matcher with the default threshold and scorer
    pub fn new(store: &'a ReferenceStore) -> Self {
        Self::with_config(store, MatcherConfig::default())
    }

    /// Create a matcher with a custom configuration and the default scorer
    pub fn with_config(store: &'a ReferenceStore, config: MatcherConfig) -> Self {
        Self {
            store,
            config,
            scorer: LevenshteinRatio,
        }
    }
}

impl<'a, S: SimilarityScorer> Matcher<'a, S> {
    /// Replace the similarity scorer
    ///
    /// # Examples
    ///
    /// ```rust
    /// use skincare_ingredients::matcher::{MatchOutcome, Matcher};
    /// use skincare_ingredients::reference_store::ReferenceStore;
    /// use skincare_ingredients::similarity::TokenSortRatio;
    ///
    /// let csv = "Ingredient,Function,Risk Level,Description\n\
    ///            Salicylic Acid,Exfoliant,medium,BHA\n";
    /// let store = ReferenceStore::from_reader(csv.as_bytes())?;
    /// let matcher = Matcher::new(&store).with_scorer(TokenSortRatio);
    ///
    /// assert_eq!(
    ///     matcher.resolve("Acid Salicylic")?,
    ///     MatchOutcome::Resolved { canonical_name: "Salicylic Acid".to_string() }
    /// );
    /// # Ok::<(), skincare_ingredients::errors::AnalyzerError>(())
    /// ```
    pub fn with_scorer<T: SimilarityScorer>(self, scorer: T) -> Matcher<'a, T> {
        Matcher {
            store: self.store,
            config: self.config,
            scorer,
        }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Resolve a single candidate
    ///
    /// # Errors
    ///
    /// Returns `AnalyzerError::NoReferenceData` if the store is empty.
    pub fn resolve(&self, candidate: &str) -> Result<MatchOutcome, AnalyzerError> {
        if self.store.is_empty() {
            return Err(AnalyzerError::NoReferenceData);
        }

        if let Some(entry) = self.store.lookup_exact(candidate) {
            debug!("Exact match '{}' -> '{}'", candidate, entry.name);
            return Ok(MatchOutcome::Resolved {
                canonical_name: entry.name.clone(),
            });
        }

        let (best_name, best_score) = self
            .best_match(candidate)
            .ok_or(AnalyzerError::NoReferenceData)?;

        if best_score > self.config.threshold {
            debug!(
                "Fuzzy match '{}' -> '{}' (score {})",
                candidate, best_name, best_score
            );
            Ok(MatchOutcome::Resolved {
                canonical_name: best_name.to_string(),
            })
        } else {
            info!(
                "No confident match for '{}', suggesting '{}' (score {} <= {})",
                candidate, best_name, best_score, self.config.threshold
            );
            Ok(MatchOutcome::Suggested(Suggestion {
                original_text: candidate.to_string(),
                suggested_name: best_name.to_string(),
                score: best_score,
            }))
        }
    }

    /// Resolve every candidate, keeping input order within each category
    pub fn resolve_all<C: AsRef<str>>(
        &self,
        candidates: &[C],
    ) -> Result<MatchResults, AnalyzerError> {
        if self.store.is_empty() {
            return Err(AnalyzerError::NoReferenceData);
        }

        let mut results = MatchResults::default();
        for candidate in candidates {
            let outcome = self.resolve(candidate.as_ref())?;
            match &outcome {
                MatchOutcome::Resolved { canonical_name } => {
                    results.resolved.push(canonical_name.clone())
                }
                MatchOutcome::Suggested(suggestion) => {
                    results.suggestions.push(suggestion.clone())
                }
            }
            results.outcomes.push(outcome);
        }

        info!(
            "Resolved {} of {} candidates, {} suggestions",
            results.resolved.len(),
            candidates.len(),
            results.suggestions.len()
        );
        Ok(results)
    }

    /// Highest-scoring known name; ties go to the earliest loaded name
    fn best_match(&self, candidate: &str) -> Option<(&'a str, u8)> {
        let mut best: Option<(&'a str, u8)> = None;
        for name in self.store.names_in_load_order() {
            let score = self.scorer.similarity(candidate, name);
            trace!("Scored '{}' against '{}': {}", candidate, name, score);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((name, score));
            }
        }
        best
    }
}

/// Resolve one candidate with the default matcher
pub fn resolve(candidate: &str, store: &ReferenceStore) -> Result<MatchOutcome, AnalyzerError> {
    Matcher::new(store).resolve(candidate)
}

/// Resolve a candidate list with the default matcher
pub fn resolve_all<C: AsRef<str>>(
    candidates: &[C],
    store: &ReferenceStore,
) -> Result<MatchResults, AnalyzerError> {
    Matcher::new(store).resolve_all(candidates)
}
