//! Verse similarity search.
//!
//! The pipeline that every frontend (CLI, HTTP) delegates to. It works only
//! through the [`VerseSource`] and [`SynonymSource`] traits; the caller picks
//! the implementations and parses the threshold.
//!
//! # Algorithm
//!
//! 1. Expand the paragraph into a [`CandidateSet`] (see [`crate::expand`]).
//! 2. An empty candidate set ends the search with [`SearchOutcome::NotFound`].
//! 3. Fit a TF-IDF model on the candidate texts (unigrams + bigrams,
//!    `min_df = 2`, unsmoothed idf).
//! 4. Score each candidate by cosine similarity against the paragraph.
//! 5. Keep scores `>= threshold`, sorted by score (desc), then candidate order.

use std::collections::HashSet;

use thiserror::Error;
use tracing::{debug, info};

use crate::expand::{expand, CandidateSet};
use crate::models::{RankedResult, SearchOutcome};
use crate::source::{SynonymSource, VerseSource};
use crate::vectorize::{cosine_similarity, TfIdfVectorizer, MIN_DOCUMENT_FREQUENCY};

/// Why the candidate set could not be vectorized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    #[error("need at least 2 distinct candidate texts to rank, got {distinct}")]
    TooFewDocuments { distinct: usize },
    #[error("no term occurs in at least 2 candidate texts")]
    EmptyVocabulary,
}

/// Failure of a whole search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("vectorization failed: {0}")]
    Rank(#[from] RankError),
}

/// Parse a user-supplied threshold, falling back to `default`.
///
/// Missing, unparsable, and non-finite values all yield `default`.
/// `"inf"` and `"nan"` parse as floats but are rejected on purpose: they
/// would otherwise filter out every result or none.
///
/// ```
/// use verse_finder_core::{parse_threshold, DEFAULT_THRESHOLD};
///
/// assert_eq!(parse_threshold(Some(" 0.3 "), DEFAULT_THRESHOLD), 0.3);
/// assert_eq!(parse_threshold(Some("abc"), DEFAULT_THRESHOLD), DEFAULT_THRESHOLD);
/// assert_eq!(parse_threshold(None, DEFAULT_THRESHOLD), DEFAULT_THRESHOLD);
/// ```
pub fn parse_threshold(raw: Option<&str>, default: f64) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|t| t.is_finite())
        .unwrap_or(default)
}

/// Score every candidate against `paragraph` and keep those at or above
/// `threshold`, best first.
///
/// Terms that occur in fewer than two candidate texts carry no weight, so a
/// verse whose only overlap with the paragraph is such a term scores zero.
pub fn rank(
    paragraph: &str,
    candidates: &CandidateSet,
    threshold: f64,
) -> Result<Vec<RankedResult>, RankError> {
    let texts: Vec<&str> = candidates.verses().iter().map(|v| v.verse.as_str()).collect();

    let distinct = texts.iter().collect::<HashSet<_>>().len();
    if distinct < 2 {
        return Err(RankError::TooFewDocuments { distinct });
    }

    let vectorizer = TfIdfVectorizer::fit(&texts, MIN_DOCUMENT_FREQUENCY)?;
    let query_vec = vectorizer.transform(paragraph);
    debug!(
        candidates = texts.len(),
        vocabulary = vectorizer.dims(),
        "fitted tf-idf model"
    );

    let mut results: Vec<RankedResult> = candidates
        .verses()
        .iter()
        .filter_map(|verse| {
            let similarity = cosine_similarity(&query_vec, &vectorizer.transform(&verse.verse));
            (similarity >= threshold).then(|| RankedResult {
                similarity,
                verse: verse.clone(),
            })
        })
        .collect();

    // sort_by is stable: equal scores keep candidate order
    results.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(results)
}

/// Run the full search pipeline for one paragraph.
pub async fn search<V, S>(
    paragraph: &str,
    threshold: f64,
    verses: &V,
    synonyms: &S,
) -> Result<SearchOutcome, SearchError>
where
    V: VerseSource + ?Sized,
    S: SynonymSource + ?Sized,
{
    let candidates = expand(paragraph, verses, synonyms).await;
    if candidates.is_empty() {
        info!("no candidate verses found");
        return Ok(SearchOutcome::NotFound);
    }

    let results = rank(paragraph, &candidates, threshold)?;
    info!(
        candidates = candidates.len(),
        matched = results.len(),
        threshold,
        "ranked candidate verses"
    );

    if results.is_empty() {
        Ok(SearchOutcome::NotFound)
    } else {
        Ok(SearchOutcome::Found(results))
    }
}
