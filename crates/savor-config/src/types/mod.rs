//! Configuration type definitions
//!
//! This module contains all configuration structures organized by concern.
//! Each type is self-contained with validation and sensible defaults.

pub mod catalog;
pub mod index;
pub mod ranking;

// Re-export all types for convenience
pub use catalog::CatalogConfig;
pub use index::IndexConfig;
pub use ranking::{EmptyPreference, RankingConfig};

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::validation::Validate;

/// Default config file name looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = ".savor.yml";

/// Main configuration struct aggregating all settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Catalog ingestion settings
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Feature index construction settings
    #[serde(default)]
    pub index: IndexConfig,

    /// Ranking behavior
    #[serde(default)]
    pub ranking: RankingConfig,
}

impl Config {
    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load from an explicit path, or the default location when `None`.
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file yields `Config::default()`.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Path::new(DEFAULT_CONFIG_FILE).to_path_buf(), false),
        };

        if !path.exists() {
            if explicit {
                return Err(ConfigError::FileNotFound { path });
            }
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::IoError {
            path: path.clone(),
            source,
        })?;
        let config: Config =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::from_yaml_error(e, &path))?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<()> {
        self.catalog.validate()?;
        self.index.validate()?;
        self.ranking.validate()?;
        Ok(())
    }
}
