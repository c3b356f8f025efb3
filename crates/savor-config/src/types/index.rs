//! Feature index configuration

use serde::{Deserialize, Serialize};

/// Settings for building the TF-IDF feature index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Minimum token length kept by the tokenizer.
    ///
    /// Single characters (stray digits from ratings, punctuation
    /// leftovers) carry no signal in the feature texts.
    #[serde(default = "default_min_token_len")]
    pub min_token_len: usize,

    /// Remove English stop words before weighting terms
    #[serde(default = "default_stop_words")]
    pub stop_words: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            min_token_len: default_min_token_len(),
            stop_words: default_stop_words(),
        }
    }
}

impl crate::validation::Validate for IndexConfig {
    fn validate(&self) -> crate::error::Result<()> {
        crate::validation::validate_positive("index.min_token_len", self.min_token_len, 0)
    }
}

fn default_min_token_len() -> usize {
    2
}

fn default_stop_words() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validate;

    #[test]
    fn test_default_is_valid() {
        let config = IndexConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_token_len_rejected() {
        let config = IndexConfig {
            min_token_len: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
