//! Abstractions over the two upstream services the pipeline consumes.
//!
//! The [`VerseSource`] and [`SynonymSource`] traits let the expander run
//! against HTTP clients in production and against [`memory`] sources in
//! tests. Implementations must be `Send + Sync` to be shared by the server.
//!
//! Both operations are infallible by contract: an implementation that fails
//! to reach its service logs the failure and returns an empty list, so one
//! bad word never aborts a search.

pub mod memory;

use async_trait::async_trait;

use crate::models::Verse;

/// Looks up verses that match a single keyword.
#[async_trait]
pub trait VerseSource: Send + Sync {
    /// Verses matching `word`, in upstream order. Empty on failure.
    async fn lookup(&self, word: &str) -> Vec<Verse>;
}

/// Proposes words related to a single word.
#[async_trait]
pub trait SynonymSource: Send + Sync {
    /// Related words whose score is at least
    /// [`MIN_SYNONYM_SCORE`](crate::models::MIN_SYNONYM_SCORE), in upstream
    /// order. Empty on failure.
    async fn synonyms(&self, word: &str) -> Vec<String>;
}
