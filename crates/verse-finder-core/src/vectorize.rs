//! TF-IDF vectorization and cosine similarity.
//!
//! The vectorizer learns a vocabulary and idf weights from the candidate
//! verse texts, then maps any text into that space:
//!
//! - terms are the unigrams and bigrams produced by [`analyze`]
//! - a term enters the vocabulary only if it appears in at least
//!   `min_df` documents; every other term weighs zero everywhere
//! - `idf = ln(n / df) + 1` with no smoothing
//! - `weight = raw count × idf`, and every vector is L2-normalized

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::search::RankError;
use crate::tokenize::analyze;

/// Minimum number of candidate texts a term must occur in to be weighted.
pub const MIN_DOCUMENT_FREQUENCY: usize = 2;

/// A fitted TF-IDF model.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    /// term → dimension index (dimensions follow lexical term order)
    vocabulary: HashMap<String, usize>,
    /// idf weight per dimension
    idf: Vec<f64>,
}

impl TfIdfVectorizer {
    /// Learn vocabulary and idf weights from `documents`.
    ///
    /// Fails with [`RankError::EmptyVocabulary`] when no term reaches
    /// `min_df`.
    pub fn fit(documents: &[&str], min_df: usize) -> Result<Self, RankError> {
        let n = documents.len() as f64;

        let mut doc_freq: BTreeMap<String, usize> = BTreeMap::new();
        for doc in documents {
            let unique: HashSet<String> = analyze(doc).into_iter().collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let mut vocabulary = HashMap::new();
        let mut idf = Vec::new();
        for (term, df) in doc_freq {
            if df < min_df {
                continue;
            }
            vocabulary.insert(term, idf.len());
            idf.push((n / df as f64).ln() + 1.0);
        }

        if vocabulary.is_empty() {
            return Err(RankError::EmptyVocabulary);
        }

        Ok(Self { vocabulary, idf })
    }

    pub fn dims(&self) -> usize {
        self.idf.len()
    }

    /// The idf weight of `term`, if it is part of the vocabulary.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&idx| self.idf[idx])
    }

    /// Map `text` to an L2-normalized TF-IDF vector.
    ///
    /// Terms outside the vocabulary are ignored; a text with no known term
    /// maps to the zero vector.
    pub fn transform(&self, text: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.dims()];
        for term in analyze(text) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                vector[idx] += 1.0;
            }
        }
        for (weight, idf) in vector.iter_mut().zip(&self.idf) {
            *weight *= idf;
        }
        normalize(&mut vector);
        vector
    }
}

/// Scale `vector` to unit length. Zero vectors are left untouched.
fn normalize(vector: &mut [f64]) {
    let norm = vector.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > f64::EPSILON {
        for x in vector.iter_mut() {
            *x /= norm;
        }
    }
}

/// Cosine similarity between two vectors.
///
/// Returns `0.0` for empty vectors, vectors of different lengths, or when
/// either vector has zero magnitude.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom < f64::EPSILON {
        return 0.0;
    }

    dot / denom
}
