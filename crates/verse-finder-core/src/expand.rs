//! Query expansion.
//!
//! Turns a paragraph into the set of candidate verses to rank: every word
//! is looked up directly, then each of its qualifying synonyms is looked up
//! too. Calls are issued one at a time in the order the words and synonyms
//! are discovered.

use std::collections::HashMap;

use tracing::debug;

use crate::models::Verse;
use crate::source::{SynonymSource, VerseSource};
use crate::tokenize::words;

/// Candidate verses keyed by verse id.
///
/// Inserting a verse whose id is already present replaces the stored value
/// but keeps the entry at the position where the id first appeared.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    verses: Vec<Verse>,
    index: HashMap<u64, usize>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a verse by id.
    pub fn insert(&mut self, verse: Verse) {
        match self.index.get(&verse.id) {
            Some(&pos) => self.verses[pos] = verse,
            None => {
                self.index.insert(verse.id, self.verses.len());
                self.verses.push(verse);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    /// Verses in candidate order.
    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }
}

impl Extend<Verse> for CandidateSet {
    fn extend<I: IntoIterator<Item = Verse>>(&mut self, iter: I) {
        for verse in iter {
            self.insert(verse);
        }
    }
}

impl FromIterator<Verse> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Verse>>(iter: I) -> Self {
        let mut set = CandidateSet::new();
        set.extend(iter);
        set
    }
}

/// Collect candidate verses for every word of `paragraph` and its synonyms.
pub async fn expand<V, S>(paragraph: &str, verses: &V, synonyms: &S) -> CandidateSet
where
    V: VerseSource + ?Sized,
    S: SynonymSource + ?Sized,
{
    let mut fetched: Vec<Verse> = Vec::new();

    for word in words(paragraph) {
        let direct = verses.lookup(&word).await;
        debug!(word = %word, verses = direct.len(), "direct lookup");
        fetched.extend(direct);

        for synonym in synonyms.synonyms(&word).await {
            let related = verses.lookup(&synonym).await;
            debug!(word = %word, synonym = %synonym, verses = related.len(), "synonym lookup");
            fetched.extend(related);
        }
    }

    let fetched_count = fetched.len();
    let candidates: CandidateSet = fetched.into_iter().collect();
    debug!(
        fetched = fetched_count,
        unique = candidates.len(),
        "expanded paragraph into candidate set"
    );
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::memory::{InMemorySynonyms, InMemoryVerses};

    fn verse(id: u64, text: &str) -> Verse {
        Verse {
            id,
            book: "Juan".to_string(),
            chapter: 1,
            number: id as u32,
            verse: text.to_string(),
        }
    }

    #[test]
    fn test_insert_dedups_by_id() {
        let mut set = CandidateSet::new();
        set.insert(verse(1, "first"));
        set.insert(verse(2, "second"));
        set.insert(verse(1, "replaced"));
        assert_eq!(set.len(), 2);
        assert_eq!(set.verses()[0].verse, "replaced");
        assert_eq!(set.verses()[1].id, 2);
    }

    #[tokio::test]
    async fn test_word_without_matches_contributes_nothing() {
        let verses = InMemoryVerses::new().with("luz", vec![verse(1, "la luz")]);
        let synonyms = InMemorySynonyms::new();

        let with_unknown = expand("luz xyz123", &verses, &synonyms).await;
        let without = expand("luz", &verses, &synonyms).await;

        assert_eq!(with_unknown.verses(), without.verses());
    }

    #[tokio::test]
    async fn test_duplicate_ids_across_lookups_collapse() {
        let verses = InMemoryVerses::new()
            .with("amor", vec![verse(7, "el amor"), verse(8, "amor fraternal")])
            .with("caridad", vec![verse(7, "el amor"), verse(9, "la caridad")]);
        let synonyms = InMemorySynonyms::new().with("amor", "caridad", 0.6);

        let set = expand("amor", &verses, &synonyms).await;

        let ids: Vec<u64> = set.verses().iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![7, 8, 9]);
    }

    #[tokio::test]
    async fn test_lookup_order_is_word_then_its_synonyms() {
        let verses = InMemoryVerses::new();
        let synonyms = InMemorySynonyms::new()
            .with("fe", "creencia", 0.4)
            .with("fe", "confianza", 0.3)
            .with("esperanza", "anhelo", 0.01);

        expand("fe, esperanza", &verses, &synonyms).await;

        assert_eq!(
            verses.calls(),
            vec!["fe", "creencia", "confianza", "esperanza"]
        );
    }

    #[tokio::test]
    async fn test_empty_paragraph_makes_no_calls() {
        let verses = InMemoryVerses::new();
        let set = expand("  ¿? ", &verses, &InMemorySynonyms::new()).await;
        assert!(set.is_empty());
        assert!(verses.calls().is_empty());
    }
}
