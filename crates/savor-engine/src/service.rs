//! The immutable recommendation context.

use savor_config::Config;
use savor_core::{Catalog, PreferenceSet};
use savor_index::FeatureIndex;
use tracing::debug;

use crate::entities::EntityRecognizer;
use crate::extract::QueryExtractor;
use crate::rank::{RankOutcome, Ranker};

/// Bundles the read-only catalog, similarity index, extractor and ranker
/// into one explicitly constructed context object.
///
/// Everything inside is immutable after construction, so a single
/// `Recommender` can serve successive (or concurrent) sessions; a data
/// refresh means building a new one and swapping it in behind whatever
/// barrier the caller uses.
pub struct Recommender {
    catalog: Catalog,
    index: FeatureIndex,
    extractor: QueryExtractor,
    ranker: Ranker,
}

impl Recommender {
    /// Build the full pipeline context: feature index over the catalog,
    /// extractor with the default rule-based recognizer, ranker with the
    /// configured empty-token policy.
    pub fn new(catalog: Catalog, config: &Config) -> Self {
        let index = FeatureIndex::build(&catalog, &config.index);
        let extractor = QueryExtractor::new(&catalog);
        let ranker = Ranker::new(config.ranking.empty_preference);
        Self {
            catalog,
            index,
            extractor,
            ranker,
        }
    }

    /// Same, with a caller-supplied entity recognizer.
    pub fn with_recognizer(
        catalog: Catalog,
        config: &Config,
        recognizer: Box<dyn EntityRecognizer + Send + Sync>,
    ) -> Self {
        let index = FeatureIndex::build(&catalog, &config.index);
        let extractor = QueryExtractor::with_recognizer(&catalog, recognizer);
        let ranker = Ranker::new(config.ranking.empty_preference);
        Self {
            catalog,
            index,
            extractor,
            ranker,
        }
    }

    pub fn extract(&self, text: &str) -> PreferenceSet {
        self.extractor.extract(text)
    }

    pub fn rank(&self, preferences: &PreferenceSet, top_n: usize) -> RankOutcome {
        self.ranker.rank(&self.catalog, &self.index, preferences, top_n)
    }

    /// Extract-then-rank in one call
    pub fn recommend(&self, text: &str, top_n: usize) -> RankOutcome {
        let preferences = self.extract(text);
        debug!(tokens = preferences.len(), top_n, "recommending");
        self.rank(&preferences, top_n)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
