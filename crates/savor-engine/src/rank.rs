//! Candidate filtering and similarity-based ranking.

use std::cmp::Ordering;

use savor_config::EmptyPreference;
use savor_core::{Catalog, PreferenceSet, Recommendation};
use savor_index::FeatureIndex;
use tracing::debug;

/// Ranking result: either an ordered list of scored records or the
/// no-candidates sentinel. Callers branch on the variant, never on the
/// length of the list.
#[derive(Debug, Clone, PartialEq)]
pub enum RankOutcome {
    Ranked(Vec<Recommendation>),
    NoMatch,
}

/// Scores catalog rows against the candidate subset selected by the
/// preference tokens.
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    empty_preference: EmptyPreference,
}

impl Ranker {
    pub fn new(empty_preference: EmptyPreference) -> Self {
        Self { empty_preference }
    }

    /// Rank the catalog for one preference set.
    ///
    /// Candidate filtering treats the whole `PreferenceSet` as a flat bag
    /// of substrings tested against the raw `cuisines` field. Location
    /// and budget tokens participate deliberately, so a location string
    /// that happens to substring-match a cuisine label is a legitimate
    /// match. Scoring then covers the ENTIRE catalog, not just the
    /// candidates: every row gets the mean of its similarities to the
    /// candidate subset, so rows outside the filter can still rank when
    /// they sit close to the matched rows.
    ///
    /// `top_n` is assumed pre-validated (positive, within the configured
    /// ceiling); when it exceeds the catalog size the whole catalog comes
    /// back ranked.
    pub fn rank(
        &self,
        catalog: &Catalog,
        index: &FeatureIndex,
        preferences: &PreferenceSet,
        top_n: usize,
    ) -> RankOutcome {
        let candidates = self.candidates(catalog, preferences);
        debug!(candidates = candidates.len(), top_n, "ranking catalog");
        if candidates.is_empty() {
            return RankOutcome::NoMatch;
        }

        let n = catalog.len();
        let mut scores = vec![0.0f32; n];
        for (i, score) in scores.iter_mut().enumerate() {
            let sum: f32 = candidates.iter().map(|&c| index.similarity(c, i)).sum();
            let mean = sum / candidates.len() as f32;
            *score = if mean.is_finite() { mean } else { 0.0 };
        }

        let mut order: Vec<usize> = (0..n).collect();
        // Stable sort: equal scores keep the lower catalog index first.
        order.sort_by(|&a, &b| scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal));

        let ranked = order
            .into_iter()
            .take(top_n)
            .map(|i| Recommendation {
                restaurant: catalog.records()[i].clone(),
                score: scores[i],
            })
            .collect();
        RankOutcome::Ranked(ranked)
    }

    /// Indices of rows whose `cuisines` field contains any preference
    /// token as a case-insensitive substring.
    fn candidates(&self, catalog: &Catalog, preferences: &PreferenceSet) -> Vec<usize> {
        let needles: Vec<String> = preferences
            .iter()
            .filter(|token| match self.empty_preference {
                // An empty token is a substring of everything, so under
                // MatchAll it selects the whole catalog.
                EmptyPreference::MatchAll => true,
                EmptyPreference::NoMatch => !token.is_empty(),
            })
            .map(|token| token.to_lowercase())
            .collect();

        if needles.is_empty() {
            return Vec::new();
        }

        catalog
            .records()
            .iter()
            .enumerate()
            .filter(|(_, record)| {
                let cuisines = record.cuisines.to_lowercase();
                needles.iter().any(|needle| cuisines.contains(needle.as_str()))
            })
            .map(|(i, _)| i)
            .collect()
    }
}
