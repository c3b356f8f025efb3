//! Free text to preference tokens.

use std::collections::HashSet;

use itertools::Itertools;
use tracing::debug;

use savor_core::catalog::normalize_cuisine;
use savor_core::{Catalog, PreferenceSet};

use crate::entities::{EntityKind, EntityRecognizer, RuleBasedRecognizer};

/// Turns one user query into an ordered `PreferenceSet`.
///
/// Holds the catalog-derived cuisine vocabulary and an entity recognizer;
/// both are fixed at construction, so the extractor is read-only and can
/// be shared across queries.
pub struct QueryExtractor {
    vocabulary: HashSet<String>,
    recognizer: Box<dyn EntityRecognizer + Send + Sync>,
}

impl QueryExtractor {
    /// Extractor with the default rule-based recognizer
    pub fn new(catalog: &Catalog) -> Self {
        Self::with_recognizer(catalog, Box::new(RuleBasedRecognizer::new()))
    }

    /// Extractor with a caller-supplied recognizer
    pub fn with_recognizer(
        catalog: &Catalog,
        recognizer: Box<dyn EntityRecognizer + Send + Sync>,
    ) -> Self {
        Self {
            vocabulary: catalog.cuisine_vocabulary(),
            recognizer,
        }
    }

    /// Extract preference tokens: location entity texts, then budget
    /// entity texts, then one space-joined cuisine string.
    ///
    /// Cuisine matching is literal: each input token is compared
    /// case-insensitively, whitespace-stripped, for exact equality
    /// against the vocabulary, with no stemming and no fuzzy distance. The
    /// joined cuisine element is appended even when no token matched, so
    /// the result always ends with a (possibly empty) cuisine token.
    pub fn extract(&self, text: &str) -> PreferenceSet {
        let entities = self.recognizer.recognize(text);

        let mut tokens: Vec<String> = Vec::new();
        for kind in [EntityKind::Location, EntityKind::Budget] {
            tokens.extend(
                entities
                    .iter()
                    .filter(|entity| entity.kind == kind)
                    .map(|entity| entity.text.clone()),
            );
        }

        let matched: Vec<&str> = word_tokens(text)
            .filter(|token| self.vocabulary.contains(&normalize_cuisine(token)))
            .unique()
            .collect();
        tokens.push(matched.join(" "));

        debug!(?tokens, "extracted preferences");
        PreferenceSet::new(tokens)
    }
}

/// Word-level tokenization: whitespace/punctuation delimited
fn word_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
        .filter(|token| !token.is_empty())
}
