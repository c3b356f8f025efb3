//! English stop word filtering for feature-text vectorization.
//!
//! Common words carry no signal in the synthetic feature texts (pricing
//! labels, addresses, cuisine lists), so they are dropped before term
//! weighting. The list is the usual NLTK-derived English set.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// NLTK-derived English stop words, lowercased, apostrophe-free (the
/// tokenizer never emits contractions).
static ENGLISH_STOP_WORDS: &[&str] = &[
    "about", "above", "after", "again", "against", "ain", "all", "am", "an", "and", "any", "are",
    "aren", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "couldn", "did", "didn", "do", "does", "doesn", "doing", "don", "down",
    "during", "each", "few", "for", "from", "further", "had", "hadn", "has", "hasn", "have",
    "haven", "having", "he", "her", "here", "hers", "herself", "him", "himself", "his", "how", "if",
    "in", "into", "is", "isn", "it", "its", "itself", "just", "ma", "me", "mightn", "more", "most",
    "mustn", "my", "myself", "needn", "no", "nor", "not", "now", "of", "off", "on", "once", "only",
    "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "shan", "she",
    "should", "shouldn", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "wasn", "we", "were", "weren", "what", "when", "where",
    "which", "while", "who", "whom", "why", "will", "with", "won", "wouldn", "you", "your", "yours",
    "yourself", "yourselves",
];

static ENGLISH: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ENGLISH_STOP_WORDS.iter().copied().collect());

/// Stop word set consulted during tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stopwords {
    English,
    None,
}

impl Stopwords {
    /// Check whether an already-lowercased token is a stop word.
    pub fn contains(&self, token: &str) -> bool {
        match self {
            Stopwords::English => ENGLISH.contains(token),
            Stopwords::None => false,
        }
    }
}
