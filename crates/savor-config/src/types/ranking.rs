//! Ranking behavior configuration

use serde::{Deserialize, Serialize};

/// How the candidate filter treats empty preference tokens.
///
/// The query extractor always appends a cuisine token, which is the empty
/// string when nothing matched. An empty string is a substring of every
/// cuisine field, so feeding it to the filter selects the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyPreference {
    /// Empty tokens match every row (historical behavior)
    MatchAll,
    /// Empty tokens are skipped; a query with no usable signal yields no
    /// candidates
    NoMatch,
}

/// Settings governing candidate filtering and result counts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Ceiling on the number of recommendations a caller may request.
    ///
    /// Requests above this are rejected by the session loop before the
    /// ranker runs.
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Policy for empty preference tokens during candidate filtering
    #[serde(default = "default_empty_preference")]
    pub empty_preference: EmptyPreference,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            empty_preference: default_empty_preference(),
        }
    }
}

impl crate::validation::Validate for RankingConfig {
    fn validate(&self) -> crate::error::Result<()> {
        crate::validation::validate_positive("ranking.max_results", self.max_results, 0)
    }
}

fn default_max_results() -> usize {
    800
}

fn default_empty_preference() -> EmptyPreference {
    EmptyPreference::MatchAll
}
