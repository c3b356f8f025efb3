use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::models::Restaurant;

/// The immutable, cleaned restaurant table.
///
/// Built once at startup and read-only for the lifetime of the process;
/// concurrent sessions may share a reference freely. Rebuilding (e.g. on
/// a data refresh) means constructing a new `Catalog` and the indexes
/// derived from it.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<Restaurant>,
}

/// Row shape as it comes out of the source CSV; every field optional so
/// incomplete rows can be dropped instead of failing the load.
#[derive(Debug, Deserialize)]
struct RawRecord {
    name: Option<String>,
    address: Option<String>,
    tel: Option<String>,
    cuisines: Option<String>,
    pricing: Option<String>,
    rating: Option<String>,
    reviews: Option<String>,
}

impl RawRecord {
    /// Promote to a clean record; `None` when any required field is
    /// missing or blank.
    fn into_restaurant(self) -> Option<Restaurant> {
        fn required(field: Option<String>) -> Option<String> {
            let value = field?;
            if value.trim().is_empty() {
                return None;
            }
            Some(value)
        }

        Some(Restaurant {
            name: required(self.name)?,
            address: required(self.address)?,
            phone: required(self.tel)?,
            cuisines: required(self.cuisines)?,
            pricing: required(self.pricing)?,
            rating: required(self.rating)?,
            reviews: required(self.reviews)?,
        })
    }
}

impl Catalog {
    /// Load and clean the catalog from a CSV file.
    ///
    /// Expects at least the columns `name,address,tel,cuisines,pricing,
    /// rating,reviews`. Rows with a missing or blank required field are
    /// dropped, exact duplicate rows are dropped (first occurrence wins),
    /// and the result is truncated to the first `max_rows` surviving rows.
    pub fn load(path: &Path, max_rows: usize) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("failed to open catalog file {}", path.display()))?;

        let mut records = Vec::new();
        let mut seen = HashSet::new();
        let mut dropped_missing = 0usize;
        let mut dropped_duplicate = 0usize;

        for (row, result) in reader.deserialize::<RawRecord>().enumerate() {
            let raw = match result {
                Ok(raw) => raw,
                Err(e) => {
                    warn!(row = row + 1, error = %e, "skipping malformed catalog row");
                    dropped_missing += 1;
                    continue;
                }
            };
            match raw.into_restaurant() {
                Some(record) => {
                    if seen.insert(record.clone()) {
                        records.push(record);
                        if records.len() >= max_rows {
                            debug!(max_rows, "catalog row ceiling reached, ignoring the rest");
                            break;
                        }
                    } else {
                        dropped_duplicate += 1;
                    }
                }
                None => dropped_missing += 1,
            }
        }

        info!(
            kept = records.len(),
            dropped_missing, dropped_duplicate, "catalog loaded"
        );
        Ok(Self { records })
    }

    /// Build a catalog from in-memory records, applying the same
    /// dedup-then-truncate discipline as `load`.
    pub fn from_records(records: Vec<Restaurant>, max_rows: usize) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();
        for record in records {
            if seen.insert(record.clone()) {
                kept.push(record);
                if kept.len() >= max_rows {
                    break;
                }
            }
        }
        Self { records: kept }
    }

    pub fn records(&self) -> &[Restaurant] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Restaurant> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Flat set of normalized cuisine labels across the whole catalog.
    ///
    /// Each record's `cuisines` field is split on commas and normalized
    /// with [`normalize_cuisine`]; the extractor compares query tokens
    /// against this set.
    pub fn cuisine_vocabulary(&self) -> HashSet<String> {
        let mut vocabulary = HashSet::new();
        for record in &self.records {
            for label in record.cuisines.split(',') {
                let normalized = normalize_cuisine(label);
                if !normalized.is_empty() {
                    vocabulary.insert(normalized);
                }
            }
        }
        vocabulary
    }
}

/// Normalize a cuisine label for matching: lowercase with all whitespace
/// removed, so "Fast Food" and "fastfood" compare equal.
pub fn normalize_cuisine(label: &str) -> String {
    label
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(name: &str, cuisines: &str) -> Restaurant {
        Restaurant {
            name: name.to_string(),
            address: "1 Test Lane".to_string(),
            phone: "555-0100".to_string(),
            cuisines: cuisines.to_string(),
            pricing: "$$".to_string(),
            rating: "4.0".to_string(),
            reviews: "10".to_string(),
        }
    }

    #[test]
    fn from_records_drops_exact_duplicates() {
        let rows = vec![
            restaurant("Luigi", "Italian"),
            restaurant("Luigi", "Italian"),
            restaurant("Sakura", "Japanese"),
        ];
        let catalog = Catalog::from_records(rows, 100);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().name, "Luigi");
    }

    #[test]
    fn from_records_truncates_to_max_rows() {
        let rows = (0..10)
            .map(|i| restaurant(&format!("r{i}"), "Thai"))
            .collect();
        let catalog = Catalog::from_records(rows, 4);
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get(3).unwrap().name, "r3");
    }

    #[test]
    fn vocabulary_splits_and_normalizes() {
        let rows = vec![
            restaurant("a", "Italian, Fast Food"),
            restaurant("b", "italian,Seafood"),
        ];
        let catalog = Catalog::from_records(rows, 100);
        let vocabulary = catalog.cuisine_vocabulary();
        assert!(vocabulary.contains("italian"));
        assert!(vocabulary.contains("fastfood"));
        assert!(vocabulary.contains("seafood"));
        assert_eq!(vocabulary.len(), 3);
    }

    #[test]
    fn normalize_strips_case_and_spaces() {
        assert_eq!(normalize_cuisine(" Fast  Food "), "fastfood");
        assert_eq!(normalize_cuisine("Italian"), "italian");
    }
}
