//! Preference-to-ranking pipeline
//!
//! Wires the pieces together: free text goes through entity recognition
//! and cuisine keyword matching into a `PreferenceSet`, which the ranker
//! scores against the precomputed similarity index. The [`Recommender`]
//! bundles the read-only catalog and index into one context object
//! shared by successive queries.

pub mod entities;
pub mod export;
pub mod extract;
pub mod rank;
pub mod service;

pub use entities::{Entity, EntityKind, EntityRecognizer, RuleBasedRecognizer};
pub use export::export_csv;
pub use extract::QueryExtractor;
pub use rank::{RankOutcome, Ranker};
pub use service::Recommender;
