//! # Verse Finder Core
//!
//! Network-free logic for verse-finder: the verse data model, the
//! [`source`] traits that abstract the verse and synonym services, query
//! expansion, the TF-IDF vectorizer and the ranking pipeline.
//!
//! This crate contains no HTTP client, tokio runtime, or configuration
//! loading. The `verse-finder` app crate supplies network-backed
//! [`source::VerseSource`] and [`source::SynonymSource`] implementations
//! and presents the [`models::SearchOutcome`].

pub mod expand;
pub mod models;
pub mod search;
pub mod source;
pub mod tokenize;
pub mod vectorize;

pub use models::{RankedResult, SearchOutcome, Verse, DEFAULT_THRESHOLD, MIN_SYNONYM_SCORE};
pub use search::{parse_threshold, rank, search, RankError, SearchError};
