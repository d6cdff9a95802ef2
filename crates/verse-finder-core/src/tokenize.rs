//! Text tokenization.
//!
//! Two tokenizers with different jobs:
//!
//! - [`words`] splits the user paragraph into the keywords sent to the
//!   upstream services. Case is preserved and single characters are kept.
//! - [`analyze`] produces the lowercase unigram and bigram terms used by the
//!   TF-IDF vectorizer. Only tokens of two or more word characters count.

use regex::Regex;
use std::sync::OnceLock;

fn word_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\w+").expect("static regex"))
}

fn term_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("static regex"))
}

/// Split a paragraph into keywords, in order of appearance.
///
/// Whitespace and punctuation separate words and are never returned.
/// Repeated words are kept: each occurrence is looked up again.
///
/// ```
/// use verse_finder_core::tokenize::words;
///
/// assert_eq!(words("Dios es amor, y paz."), vec!["Dios", "es", "amor", "y", "paz"]);
/// ```
pub fn words(paragraph: &str) -> Vec<String> {
    word_pattern()
        .find_iter(paragraph)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Lowercased tokens of at least two word characters.
pub fn terms(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    term_pattern()
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Unigrams followed by bigrams (joined by a single space) of [`terms`].
pub fn analyze(text: &str) -> Vec<String> {
    let tokens = terms(text);
    let mut grams = Vec::with_capacity(tokens.len() * 2);
    grams.extend(tokens.iter().cloned());
    for pair in tokens.windows(2) {
        grams.push(format!("{} {}", pair[0], pair[1]));
    }
    grams
}
