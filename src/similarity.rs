//! # Similarity Module
//!
//! String similarity scoring used by the matcher. Scores are integers in
//! `0..=100`, where 100 means the two names are identical after case folding.
//!
//! The matcher only depends on [`SimilarityScorer`], so the concrete metric can
//! be swapped without touching the matching logic.

use strsim::normalized_levenshtein;

/// Scores how alike two ingredient names are
pub trait SimilarityScorer {
    /// Similarity of `a` and `b` in `0..=100`; must be deterministic
    fn similarity(&self, a: &str, b: &str) -> u8;
}

/// Normalized Levenshtein ratio over case-folded names
///
/// `score = round(100 * (1 - distance / max_len))`, with `distance` counted in
/// characters. Two empty strings score 100.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinRatio;

impl SimilarityScorer for LevenshteinRatio {
    fn similarity(&self, a: &str, b: &str) -> u8 {
        to_score(normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase()))
    }
}

/// Levenshtein ratio after sorting whitespace-separated tokens
///
/// Makes word order irrelevant, e.g. "Acid Salicylic" vs "Salicylic Acid".
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenSortRatio;

impl SimilarityScorer for TokenSortRatio {
    fn similarity(&self, a: &str, b: &str) -> u8 {
        LevenshteinRatio.similarity(&sorted_tokens(a), &sorted_tokens(b))
    }
}

/// Similarity with the default scorer
///
/// # Examples
///
/// ```rust
/// use skincare_ingredients::similarity::similarity;
///
/// assert_eq!(similarity("Glycerin", "glycerin"), 100);
/// assert!(similarity("Glycrin", "Glycerin") > 80);
/// assert!(similarity("Xyzzplorq", "Glycerin") < 50);
/// ```
pub fn similarity(a: &str, b: &str) -> u8 {
    LevenshteinRatio.similarity(a, b)
}

fn to_score(ratio: f64) -> u8 {
    (ratio.clamp(0.0, 1.0) * 100.0).round() as u8
}

fn sorted_tokens(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut tokens: Vec<&str> = lowered.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}
