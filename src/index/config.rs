//! Configuration for index construction.
//!
//! # Examples
//!
//! ```
//! use lexicon::index::IndexConfig;
//!
//! let config = IndexConfig::default();
//! assert_eq!(config.expected_terms, 1024);
//!
//! let config = IndexConfig::from_json_str(r#"{ "expected_terms": 64 }"#).unwrap();
//! assert_eq!(config.expected_terms, 64);
//! assert_eq!(config.progress_interval, 0);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{LexiconError, Result};

/// Upper bound accepted for `expected_terms`.
pub const MAX_EXPECTED_TERMS: usize = 1 << 28;

/// Configuration for an [`IndexBuilder`](super::IndexBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Capacity hint for the term dictionary.
    pub expected_terms: usize,

    /// Log progress every this many documents (0 disables progress logging).
    pub progress_interval: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig {
            expected_terms: 1024,
            progress_interval: 0,
        }
    }
}

impl IndexConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: IndexConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for out-of-range values.
    pub fn validate(&self) -> Result<()> {
        if self.expected_terms > MAX_EXPECTED_TERMS {
            return Err(LexiconError::invalid_config(format!(
                "expected_terms {} exceeds the maximum of {}",
                self.expected_terms, MAX_EXPECTED_TERMS
            )));
        }
        Ok(())
    }
}
