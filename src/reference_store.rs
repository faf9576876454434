//! # Reference Store Module
//!
//! Loads and holds the canonical ingredient table used for every lookup.
//!
//! ## Source Format
//!
//! A UTF-8 CSV file whose header row contains the columns
//! `Ingredient`, `Function`, `Risk Level` and `Description` (any order, extra
//! columns ignored). Rows with an empty `Ingredient` are dropped.
//!
//! ## Usage
//!
//! ```rust
//! use skincare_ingredients::reference_store::{ReferenceStore, RiskTier};
//!
//! let csv = "Ingredient,Function,Risk Level,Description\n\
//!            Glycerin,Humectant,low,Draws moisture into the skin\n";
//! let store = ReferenceStore::from_reader(csv.as_bytes())?;
//!
//! let entry = store.lookup_exact("GLYCERIN").unwrap();
//! assert_eq!(entry.name, "Glycerin");
//! assert_eq!(entry.risk_tier, RiskTier::Low);
//! # Ok::<(), skincare_ingredients::errors::AnalyzerError>(())
//! ```

use crate::errors::AnalyzerError;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Header columns every reference source must provide
pub const REQUIRED_COLUMNS: [&str; 4] = ["Ingredient", "Function", "Risk Level", "Description"];

/// Coarse safety classification attached to a reference entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum RiskTier {
    Low,
    Medium,
    High,
    #[default]
    Unknown,
}

impl RiskTier {
    /// All tiers in display order
    pub const ALL: [RiskTier; 4] = [
        RiskTier::Low,
        RiskTier::Medium,
        RiskTier::High,
        RiskTier::Unknown,
    ];

    /// Parse a raw reference value, ignoring case and surrounding whitespace.
    ///
    /// Anything outside the three known levels maps to `Unknown`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "low" => RiskTier::Low,
            "medium" => RiskTier::Medium,
            "high" => RiskTier::High,
            _ => RiskTier::Unknown,
        }
    }

    /// Capitalized display label
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
            RiskTier::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for RiskTier {
    fn from(raw: String) -> Self {
        RiskTier::parse(&raw)
    }
}

impl From<RiskTier> for String {
    fn from(tier: RiskTier) -> Self {
        tier.as_str().to_string()
    }
}

/// A canonical ingredient as stored in the reference database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    /// Canonical name, the join key for all lookups
    pub name: String,
    /// Free-text functional category (e.g., "Humectant", "Preservative")
    pub function: String,
    /// Safety classification
    pub risk_tier: RiskTier,
    /// Human readable description
    pub description: String,
}

/// One CSV row before validation
#[derive(Debug, Deserialize)]
struct RawReferenceRow {
    #[serde(rename = "Ingredient")]
    ingredient: Option<String>,
    #[serde(rename = "Function")]
    function: Option<String>,
    #[serde(rename = "Risk Level")]
    risk_level: Option<String>,
    #[serde(rename = "Description")]
    description: Option<String>,
}

/// Read-only ingredient table plus a case-insensitive name index
#[derive(Debug, Clone, Default)]
pub struct ReferenceStore {
    entries: Vec<ReferenceEntry>,
    /// Lowercased name -> position of the first entry with that name
    index: HashMap<String, usize>,
}

impl ReferenceStore {
    /// Load the reference table from a CSV file on disk
    ///
    /// # Errors
    ///
    /// Returns `AnalyzerError::DataLoad` if the file is missing or unreadable,
    /// if the CSV is malformed, or if a required column is absent.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AnalyzerError> {
        let path = path.as_ref();
        info!("Loading ingredient reference data from {}", path.display());

        let file = File::open(path).map_err(|e| {
            AnalyzerError::DataLoad(format!("cannot open {}: {e}", path.display()))
        })?;

        Self::from_reader(file)
    }

    /// Load the reference table from any CSV byte stream
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, AnalyzerError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr
            .headers()
            .map_err(|e| AnalyzerError::DataLoad(format!("cannot read header row: {e}")))?
            .clone();

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|column| !headers.iter().any(|h| h == *column))
            .collect();
        if !missing.is_empty() {
            return Err(AnalyzerError::DataLoad(format!(
                "missing required columns: {}",
                missing.join(", ")
            )));
        }

        let mut entries = Vec::new();
        for (row_number, row) in rdr.deserialize::<RawReferenceRow>().enumerate() {
            let row = row.map_err(|e| {
                AnalyzerError::DataLoad(format!("malformed row {}: {e}", row_number + 1))
            })?;

            let name = match row.ingredient {
                Some(name) if !name.trim().is_empty() => name,
                _ => {
                    debug!("Dropping row {} with empty ingredient name", row_number + 1);
                    continue;
                }
            };

            entries.push(ReferenceEntry {
                name,
                function: row.function.unwrap_or_default(),
                risk_tier: RiskTier::parse(row.risk_level.as_deref().unwrap_or_default()),
                description: row.description.unwrap_or_default(),
            });
        }

        let store = Self::from_entries(entries);
        info!("Loaded {} reference ingredients", store.len());
        Ok(store)
    }

    /// Build a store from already-typed entries, keeping their order
    ///
    /// Names are trimmed and entries with an empty name are dropped, as when
    /// loading from CSV.
    pub fn from_entries(entries: Vec<ReferenceEntry>) -> Self {
        let entries: Vec<ReferenceEntry> = entries
            .into_iter()
            .filter_map(|mut entry| {
                let trimmed = entry.name.trim();
                if trimmed.is_empty() {
                    return None;
                }
                if trimmed.len() != entry.name.len() {
                    entry.name = trimmed.to_string();
                }
                Some(entry)
            })
            .collect();

        let mut index: HashMap<String, usize> = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            let key = entry.name.to_lowercase();
            if let Some(&first) = index.get(&key) {
                warn!(
                    "Duplicate ingredient name '{}' (first loaded as '{}'), keeping the first entry",
                    entry.name, entries[first].name
                );
                continue;
            }
            index.insert(key, position);
        }

        Self { entries, index }
    }

    /// All distinct canonical names
    pub fn known_names(&self) -> BTreeSet<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    /// Canonical names in load order, the iteration order used for fuzzy matching
    pub fn names_in_load_order(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Case-insensitive exact lookup; the first loaded entry wins on collisions
    pub fn lookup_exact(&self, name: &str) -> Option<&ReferenceEntry> {
        self.index
            .get(&name.to_lowercase())
            .map(|&position| &self.entries[position])
    }

    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
