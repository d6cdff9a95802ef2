//! In-memory [`VerseSource`] and [`SynonymSource`] implementations.
//!
//! Used by tests and by callers that want to run the pipeline against a
//! fixed data set. Lookups are exact-match on the word and record every
//! call so tests can assert the order in which the expander queried them.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::models::{SynonymCandidate, Verse};

use super::{SynonymSource, VerseSource};

/// Verse source backed by a word → verses map.
#[derive(Default)]
pub struct InMemoryVerses {
    by_word: HashMap<String, Vec<Verse>>,
    calls: Mutex<Vec<String>>,
}

impl InMemoryVerses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the verses returned for `word`.
    pub fn with(mut self, word: &str, verses: Vec<Verse>) -> Self {
        self.by_word.entry(word.to_string()).or_default().extend(verses);
        self
    }

    /// Words looked up so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl VerseSource for InMemoryVerses {
    async fn lookup(&self, word: &str) -> Vec<Verse> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(word.to_string());
        }
        self.by_word.get(word).cloned().unwrap_or_default()
    }
}

/// Synonym source backed by a word → scored candidates map.
///
/// Candidates are stored with their scores and filtered on lookup, the same
/// way the HTTP client filters the upstream payload.
#[derive(Default)]
pub struct InMemorySynonyms {
    by_word: HashMap<String, Vec<SynonymCandidate>>,
}

impl InMemorySynonyms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a scored synonym for `word`.
    pub fn with(mut self, word: &str, synonym: &str, score: f64) -> Self {
        self.by_word
            .entry(word.to_string())
            .or_default()
            .push(SynonymCandidate {
                word: synonym.to_string(),
                score,
            });
        self
    }
}

#[async_trait]
impl SynonymSource for InMemorySynonyms {
    async fn synonyms(&self, word: &str) -> Vec<String> {
        self.by_word
            .get(word)
            .map(|candidates| {
                candidates
                    .iter()
                    .filter(|c| c.qualifies())
                    .map(|c| c.word.clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}
