//! Catalog ingestion configuration

use serde::{Deserialize, Serialize};

/// Settings for loading and bounding the restaurant catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Maximum number of rows kept after cleaning and deduplication.
    ///
    /// The feature index computes a full pairwise similarity matrix, so
    /// both memory and build time grow with the square of the catalog
    /// size. This ceiling keeps that cost bounded; raise it only with the
    /// quadratic cost in mind.
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            max_rows: default_max_rows(),
        }
    }
}

impl crate::validation::Validate for CatalogConfig {
    fn validate(&self) -> crate::error::Result<()> {
        crate::validation::validate_positive("catalog.max_rows", self.max_rows, 0)
    }
}

fn default_max_rows() -> usize {
    8000
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validate;

    #[test]
    fn test_default_is_valid() {
        let config = CatalogConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_rows, 8000);
    }

    #[test]
    fn test_zero_max_rows_rejected() {
        let config = CatalogConfig { max_rows: 0 };
        assert!(config.validate().is_err());
    }
}
