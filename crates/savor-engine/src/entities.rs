//! Pattern-based entity recognition for user queries.
//!
//! The extractor only cares about two entity kinds, locations and
//! budgets, so the recognizer interface is a closed set of variants
//! rather than free-form tags. The default implementation is rule-based:
//! monetary amounts by pattern, locations as capitalized token runs cued
//! by a preposition ("in England", "near New York"). Remaining
//! capitalized runs are reported as `Other` and consumed by nobody.

use once_cell::sync::Lazy;
use regex::Regex;

/// Closed set of entity kinds the pipeline understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Location,
    Budget,
    Other,
}

/// One recognized entity with its text kept verbatim
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub kind: EntityKind,
    pub text: String,
}

/// Pluggable recognizer seam: text in, entities in document order out.
pub trait EntityRecognizer {
    fn recognize(&self, text: &str) -> Vec<Entity>;
}

/// Monetary amounts: "$50", "$ 12.99", "50 dollars", "20 bucks", "35 usd"
static MONEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\$\s?\d+(?:\.\d{1,2})?|\b\d+(?:\.\d{1,2})?\s?(?:dollars?|bucks|usd)\b")
        .expect("money pattern is valid")
});

/// Prepositions that mark the following capitalized run as a place
const LOCATION_CUES: &[&str] = &["in", "near", "at", "around", "within"];

/// Default rule-based recognizer
#[derive(Debug, Default)]
pub struct RuleBasedRecognizer;

impl RuleBasedRecognizer {
    pub fn new() -> Self {
        Self
    }
}

impl EntityRecognizer for RuleBasedRecognizer {
    fn recognize(&self, text: &str) -> Vec<Entity> {
        let mut found: Vec<(usize, Entity)> = Vec::new();

        let money_spans: Vec<(usize, usize)> = MONEY
            .find_iter(text)
            .map(|m| {
                found.push((
                    m.start(),
                    Entity {
                        kind: EntityKind::Budget,
                        text: m.as_str().to_string(),
                    },
                ));
                (m.start(), m.end())
            })
            .collect();

        let words = words_with_offsets(text);
        let in_money = |offset: usize, len: usize| {
            money_spans
                .iter()
                .any(|&(start, end)| offset < end && offset + len > start)
        };

        let mut i = 0;
        while i < words.len() {
            let (offset, word) = words[i];
            let clean = trim_punctuation(word);
            if clean.is_empty() || in_money(offset, word.len()) {
                i += 1;
                continue;
            }

            if LOCATION_CUES.contains(&clean.to_lowercase().as_str()) {
                let (run, next) = capitalized_run(&words, i + 1, &in_money);
                if !run.is_empty() {
                    found.push((
                        words[i + 1].0,
                        Entity {
                            kind: EntityKind::Location,
                            text: run.join(" "),
                        },
                    ));
                    i = next;
                    continue;
                }
            } else if is_capitalized(clean) {
                let (run, next) = capitalized_run(&words, i, &in_money);
                found.push((
                    offset,
                    Entity {
                        kind: EntityKind::Other,
                        text: run.join(" "),
                    },
                ));
                i = next;
                continue;
            }

            i += 1;
        }

        found.sort_by_key(|&(offset, _)| offset);
        found.into_iter().map(|(_, entity)| entity).collect()
    }
}

/// Consecutive capitalized words starting at `start`; returns the run
/// and the index of the first word after it.
fn capitalized_run(
    words: &[(usize, &str)],
    start: usize,
    in_money: &dyn Fn(usize, usize) -> bool,
) -> (Vec<String>, usize) {
    let mut run = Vec::new();
    let mut i = start;
    while i < words.len() {
        let (offset, word) = words[i];
        let clean = trim_punctuation(word);
        if clean.is_empty() || in_money(offset, word.len()) || !is_capitalized(clean) {
            break;
        }
        run.push(clean.to_string());
        i += 1;
        // Trailing punctuation ends the phrase ("London, with a view")
        if word.ends_with(|c: char| c.is_ascii_punctuation()) {
            break;
        }
    }
    (run, i)
}

/// Uppercase first letter, alphabetic tail, more than one character
fn is_capitalized(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => {
            let rest: Vec<char> = chars.collect();
            !rest.is_empty() && rest.iter().all(|c| c.is_alphabetic())
        }
        _ => false,
    }
}

fn trim_punctuation(word: &str) -> &str {
    word.trim_matches(|c: char| !c.is_alphanumeric())
}

/// Whitespace-separated words paired with their byte offsets
fn words_with_offsets(text: &str) -> Vec<(usize, &str)> {
    let mut words = Vec::new();
    let mut cursor = 0;
    for word in text.split_whitespace() {
        // split_whitespace yields substrings of `text`, so this find
        // always succeeds at or after the cursor
        if let Some(position) = text[cursor..].find(word) {
            let offset = cursor + position;
            words.push((offset, word));
            cursor = offset + word.len();
        }
    }
    words
}
