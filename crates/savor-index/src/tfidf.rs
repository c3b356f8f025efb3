//! TF-IDF weighting over the feature-text corpus.
//!
//! Weights follow the common smoothed formulation: for a corpus of `n`
//! documents and a term appearing in `df` of them,
//!
//! ```text
//! tfidf(t, d) = count(t, d) * (ln((1 + n) / (1 + df)) + 1)
//! ```
//!
//! with each document vector L2-normalized, so the cosine similarity of
//! two documents is a plain sparse dot product.

use std::collections::{BTreeMap, HashMap};

use crate::stopwords::Stopwords;
use crate::tokenize::tokenize;

/// Sparse, L2-normalized term-weight vector for one document.
///
/// Entries are (term id, weight), sorted by term id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    entries: Vec<(u32, f32)>,
}

impl TermVector {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(u32, f32)] {
        &self.entries
    }

    /// Dot product of two sorted sparse vectors (a merge walk). Both
    /// sides are unit-length, so this is their cosine similarity; a zero
    /// vector yields 0 against everything, including itself.
    pub fn dot(&self, other: &TermVector) -> f32 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (ta, wa) = self.entries[i];
            let (tb, wb) = other.entries[j];
            match ta.cmp(&tb) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += wa * wb;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// Vectorizer fitted on the feature-text corpus.
///
/// The vocabulary is derived purely from the corpus; term ids are
/// assigned in lexicographic order so a rebuild over identical content
/// produces identical vectors.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, u32>,
    idf: Vec<f32>,
    min_token_len: usize,
    stopwords: Stopwords,
}

impl TfidfVectorizer {
    /// Learn vocabulary and document frequencies from the corpus.
    pub fn fit<S: AsRef<str>>(documents: &[S], min_token_len: usize, stopwords: Stopwords) -> Self {
        // BTreeMap keeps the term -> df mapping in lexicographic order,
        // which fixes the id assignment.
        let mut doc_freq: BTreeMap<String, usize> = BTreeMap::new();
        for doc in documents {
            let mut terms: Vec<String> =
                tokenize(doc.as_ref(), min_token_len, stopwords).collect();
            terms.sort();
            terms.dedup();
            for term in terms {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let n_docs = documents.len() as f32;
        let mut vocabulary = HashMap::with_capacity(doc_freq.len());
        let mut idf = Vec::with_capacity(doc_freq.len());
        for (id, (term, df)) in doc_freq.into_iter().enumerate() {
            vocabulary.insert(term, id as u32);
            idf.push(((1.0 + n_docs) / (1.0 + df as f32)).ln() + 1.0);
        }

        Self {
            vocabulary,
            idf,
            min_token_len,
            stopwords,
        }
    }

    /// Fit on the corpus and transform every document in one pass.
    pub fn fit_transform<S: AsRef<str>>(
        documents: &[S],
        min_token_len: usize,
        stopwords: Stopwords,
    ) -> (Self, Vec<TermVector>) {
        let vectorizer = Self::fit(documents, min_token_len, stopwords);
        let vectors = documents
            .iter()
            .map(|doc| vectorizer.transform(doc.as_ref()))
            .collect();
        (vectorizer, vectors)
    }

    /// Transform one document into its L2-normalized TF-IDF vector.
    /// Terms outside the fitted vocabulary are ignored.
    pub fn transform(&self, document: &str) -> TermVector {
        let mut counts: HashMap<u32, f32> = HashMap::new();
        for token in tokenize(document, self.min_token_len, self.stopwords) {
            if let Some(&id) = self.vocabulary.get(&token) {
                *counts.entry(id).or_insert(0.0) += 1.0;
            }
        }

        let mut entries: Vec<(u32, f32)> = counts
            .into_iter()
            .map(|(id, tf)| (id, tf * self.idf[id as usize]))
            .collect();
        entries.sort_by_key(|&(id, _)| id);

        let norm = entries.iter().map(|(_, w)| w * w).sum::<f32>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut entries {
                *w /= norm;
            }
        }

        TermVector { entries }
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}
