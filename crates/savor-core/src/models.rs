use serde::{Deserialize, Serialize};

/// One cleaned row of the restaurant catalog.
///
/// All fields are kept as the raw strings from the source table; rating
/// and review counts are never interpreted numerically, and `cuisines`
/// stays a comma-separated list. Equality and hashing cover the full row
/// so exact duplicates can be dropped at load time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Restaurant {
    pub name: String,
    pub address: String,
    /// Contact number; the source column is named `tel`
    #[serde(rename = "tel")]
    pub phone: String,
    /// Comma-separated cuisine labels, e.g. "Italian,Mediterranean"
    pub cuisines: String,
    pub pricing: String,
    pub rating: String,
    pub reviews: String,
}

/// Ordered preference tokens extracted from one user query.
///
/// Layout: location entity texts (document order), then budget entity
/// texts, then exactly one space-joined cuisine string. The cuisine
/// element is present even when empty, so consumers must treat an empty
/// string as a token rather than skip it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceSet {
    tokens: Vec<String>,
}

impl PreferenceSet {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether any token carries actual text
    pub fn has_signal(&self) -> bool {
        self.tokens.iter().any(|t| !t.is_empty())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.tokens.iter()
    }
}

impl From<Vec<String>> for PreferenceSet {
    fn from(tokens: Vec<String>) -> Self {
        Self::new(tokens)
    }
}

/// A catalog record paired with its relevance score for one query
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub restaurant: Restaurant,
    pub score: f32,
}
