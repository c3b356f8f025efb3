//! Feature index for the savor recommendation engine
//!
//! Turns every catalog row into a synthetic feature text, weights its
//! terms with TF-IDF over the whole corpus, and precomputes the full
//! pairwise cosine similarity matrix the ranker scores against. Built
//! once after the catalog is finalized; deterministic for identical
//! catalog content and stop-word configuration.

pub mod similarity;
pub mod stopwords;
pub mod tfidf;
pub mod tokenize;

pub use similarity::SimilarityMatrix;
pub use stopwords::Stopwords;
pub use tfidf::{TermVector, TfidfVectorizer};

use savor_config::IndexConfig;
use savor_core::{Catalog, Restaurant};
use tracing::info;

/// The synthetic per-record text that gets vectorized: cuisine labels,
/// pricing band, address and rating concatenated. Recomputed whenever
/// the index is rebuilt, never persisted.
pub fn feature_text(record: &Restaurant) -> String {
    format!(
        "{} {} {} {}",
        record.cuisines, record.pricing, record.address, record.rating
    )
}

/// Precomputed content-similarity index over a catalog.
///
/// Immutable once built; a catalog refresh means building a new index.
#[derive(Debug, Clone)]
pub struct FeatureIndex {
    matrix: SimilarityMatrix,
}

impl FeatureIndex {
    /// Vectorize every catalog row and compute the pairwise similarity
    /// matrix. The O(n²) matrix is the dominant cost of startup, bounded
    /// by the catalog row cap.
    pub fn build(catalog: &Catalog, config: &IndexConfig) -> Self {
        let stopwords = if config.stop_words {
            Stopwords::English
        } else {
            Stopwords::None
        };
        let texts: Vec<String> = catalog.records().iter().map(feature_text).collect();
        let (vectorizer, vectors) =
            TfidfVectorizer::fit_transform(&texts, config.min_token_len, stopwords);
        let matrix = SimilarityMatrix::from_vectors(&vectors);
        info!(
            rows = catalog.len(),
            vocabulary = vectorizer.vocabulary_size(),
            "feature index built"
        );
        Self { matrix }
    }

    /// Cosine similarity between catalog rows `i` and `j`
    pub fn similarity(&self, i: usize, j: usize) -> f32 {
        self.matrix.get(i, j)
    }

    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }

    /// Number of indexed catalog rows
    pub fn len(&self) -> usize {
        self.matrix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(cuisines: &str, pricing: &str, address: &str, rating: &str) -> Restaurant {
        Restaurant {
            name: "test".to_string(),
            address: address.to_string(),
            phone: "555-0100".to_string(),
            cuisines: cuisines.to_string(),
            pricing: pricing.to_string(),
            rating: rating.to_string(),
            reviews: "10".to_string(),
        }
    }

    #[test]
    fn feature_text_concatenates_in_order() {
        let record = restaurant("Italian,Pizza", "$$", "12 Baker Street", "4.5");
        assert_eq!(feature_text(&record), "Italian,Pizza $$ 12 Baker Street 4.5");
    }

    #[test]
    fn build_matches_catalog_size() {
        let catalog = Catalog::from_records(
            vec![
                restaurant("Italian", "$$", "12 Baker Street", "4.5"),
                restaurant("Japanese", "$$$", "3 Cherry Lane", "4.8"),
            ],
            100,
        );
        let index = FeatureIndex::build(&catalog, &IndexConfig::default());
        assert_eq!(index.len(), 2);
        assert!((index.similarity(0, 0) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn rebuild_is_deterministic() {
        let catalog = Catalog::from_records(
            vec![
                restaurant("Italian", "$$", "12 Baker Street", "4.5"),
                restaurant("Italian,Seafood", "$$", "14 Baker Street", "4.1"),
                restaurant("Mexican", "$", "9 Harbor Road", "3.9"),
            ],
            100,
        );
        let config = IndexConfig::default();
        let first = FeatureIndex::build(&catalog, &config);
        let second = FeatureIndex::build(&catalog, &config);
        for i in 0..first.len() {
            for j in 0..first.len() {
                assert_eq!(first.similarity(i, j), second.similarity(i, j));
            }
        }
    }
}
