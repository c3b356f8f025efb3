//! Configuration for the savor recommendation engine
//!
//! Provides type-safe configuration structs with validation and a simple
//! YAML loader:
//!
//! ```no_run
//! use savor_config::Config;
//!
//! // Load from default location (.savor.yml), falling back to defaults
//! let config = Config::load()?;
//!
//! let ceiling = config.ranking.max_results;
//! let cap = config.catalog.max_rows;
//! # Ok::<(), savor_config::ConfigError>(())
//! ```

pub mod error;
pub mod types;
pub mod validation;

pub use error::{ConfigError, Result};
pub use types::*;

pub use validation::Validate;
