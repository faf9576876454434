//! # Configuration Module
//!
//! Runtime settings read from the environment (a `.env` file is honored by the
//! binary through `dotenv`). Command-line flags override these values.

use crate::localization::DEFAULT_LANGUAGE;
use crate::matcher::DEFAULT_THRESHOLD;
use crate::report::UnresolvedPolicy;
use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;

/// Reference database used when `INGREDIENT_DATABASE` is not set
pub const DEFAULT_DATABASE_PATH: &str = "data/ingredient_database.csv";

pub const ENV_DATABASE: &str = "INGREDIENT_DATABASE";
pub const ENV_THRESHOLD: &str = "MATCH_THRESHOLD";
pub const ENV_UNRESOLVED_POLICY: &str = "UNRESOLVED_POLICY";
pub const ENV_LANGUAGE: &str = "ANALYZER_LANGUAGE";

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Path of the reference CSV
    pub database_path: PathBuf,
    /// Fuzzy acceptance threshold (0-100, exclusive)
    pub threshold: u8,
    /// Handling of unresolved candidates in the report
    pub unresolved: UnresolvedPolicy,
    /// Language code for user-facing messages
    pub language: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            threshold: DEFAULT_THRESHOLD,
            unresolved: UnresolvedPolicy::default(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl AppConfig {
    /// Read the configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = non_empty(lookup(ENV_DATABASE)) {
            config.database_path = PathBuf::from(path);
        }

        if let Some(raw) = non_empty(lookup(ENV_THRESHOLD)) {
            config.threshold = parse_threshold(&raw)
                .with_context(|| format!("invalid {ENV_THRESHOLD}"))?;
        }

        if let Some(raw) = non_empty(lookup(ENV_UNRESOLVED_POLICY)) {
            config.unresolved = raw
                .parse()
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("invalid {ENV_UNRESOLVED_POLICY}"))?;
        }

        if let Some(language) = non_empty(lookup(ENV_LANGUAGE)) {
            config.language = language;
        }

        Ok(config)
    }
}

/// Parse a threshold in `0..=100`
pub fn parse_threshold(raw: &str) -> Result<u8> {
    let value: u8 = raw
        .trim()
        .parse()
        .with_context(|| format!("'{raw}' is not a number between 0 and 100"))?;
    if value > 100 {
        bail!("threshold {value} is above 100");
    }
    Ok(value)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
