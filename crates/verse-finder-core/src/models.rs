//! Core data models for the verse search pipeline.
//!
//! All values are request-scoped: they are created from upstream service
//! responses for one search and dropped once the outcome is presented.

use serde::{Deserialize, Serialize};

/// Threshold used when the caller supplies none, or one that does not parse.
pub const DEFAULT_THRESHOLD: f64 = 0.05;

/// Minimum synonym-service score (inclusive) for a synonym to be expanded.
pub const MIN_SYNONYM_SCORE: f64 = 0.05;

/// A single verse as returned by the verse lookup service.
///
/// Field names follow the upstream `data[]` payload so the struct can be
/// deserialized directly from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verse {
    /// Upstream identifier, unique across the whole translation.
    pub id: u64,
    /// Book name (e.g. `"Juan"`).
    pub book: String,
    pub chapter: u32,
    /// Verse number within the chapter.
    pub number: u32,
    /// Verse text.
    pub verse: String,
}

/// A word proposed by the synonym service together with its score.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SynonymCandidate {
    pub word: String,
    pub score: f64,
}

impl SynonymCandidate {
    /// Whether this candidate is strong enough to be expanded.
    pub fn qualifies(&self) -> bool {
        self.score >= MIN_SYNONYM_SCORE
    }
}

/// A candidate verse that passed the threshold, with its similarity score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult {
    /// Cosine similarity against the query paragraph, in `[0.0, 1.0]`.
    pub similarity: f64,
    #[serde(flatten)]
    pub verse: Verse,
}

/// Terminal state of one search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// At least one verse scored at or above the threshold.
    Found(Vec<RankedResult>),
    /// No candidates were fetched, or none passed the threshold.
    NotFound,
}

impl SearchOutcome {
    /// The ranked results, empty for [`SearchOutcome::NotFound`].
    pub fn results(&self) -> &[RankedResult] {
        match self {
            SearchOutcome::Found(results) => results,
            SearchOutcome::NotFound => &[],
        }
    }
}
