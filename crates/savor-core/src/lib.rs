//! Core domain types for the savor recommendation engine
//!
//! The catalog is the immutable, cleaned table of restaurant records that
//! every later stage (feature index, query extraction, ranking) reads
//! from. It is built once at startup and never mutated.

pub mod catalog;
pub mod models;

pub use catalog::Catalog;
pub use models::{PreferenceSet, Recommendation, Restaurant};
