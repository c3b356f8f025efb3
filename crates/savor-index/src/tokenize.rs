//! Feature-text tokenization.

use crate::stopwords::Stopwords;

/// Tokenize feature text: lowercase, split on every non-alphanumeric
/// character, keep tokens of at least `min_len` characters that are not
/// stop words.
pub fn tokenize<'a>(
    text: &'a str,
    min_len: usize,
    stopwords: Stopwords,
) -> impl Iterator<Item = String> + 'a {
    text.split(|c: char| !c.is_alphanumeric())
        .map(str::to_lowercase)
        .filter(move |t| t.chars().count() >= min_len && !stopwords.contains(t))
}
