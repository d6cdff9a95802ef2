//! Verse search wiring and the `vf search` / `vf lookup` / `vf synonyms`
//! commands.
//!
//! [`VerseSearch`] bundles the two sources with the configured fallback
//! threshold. Both the CLI and the HTTP server run searches through it.

use anyhow::Result;
use serde::Serialize;
use std::sync::Arc;

use verse_finder_core::source::{SynonymSource, VerseSource};
use verse_finder_core::{parse_threshold, RankedResult, SearchError, SearchOutcome};

use crate::clients::{build_http_client, SynonymClient, VerseClient};
use crate::config::Config;

/// The search pipeline bound to concrete sources.
#[derive(Clone)]
pub struct VerseSearch {
    verses: Arc<dyn VerseSource>,
    synonyms: Arc<dyn SynonymSource>,
    default_threshold: f64,
}

impl VerseSearch {
    pub fn new(
        verses: Arc<dyn VerseSource>,
        synonyms: Arc<dyn SynonymSource>,
        default_threshold: f64,
    ) -> Self {
        Self {
            verses,
            synonyms,
            default_threshold,
        }
    }

    /// Pipeline backed by the HTTP clients described in `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = build_http_client(&config.http)?;
        Ok(Self::new(
            Arc::new(VerseClient::from_config(http.clone(), config)),
            Arc::new(SynonymClient::from_config(http, config)),
            config.search.default_threshold,
        ))
    }

    /// Parse a raw threshold parameter, falling back to the configured default.
    pub fn threshold(&self, raw: Option<&str>) -> f64 {
        parse_threshold(raw, self.default_threshold)
    }

    pub async fn run(&self, paragraph: &str, threshold: f64) -> Result<SearchOutcome, SearchError> {
        verse_finder_core::search(paragraph, threshold, &*self.verses, &*self.synonyms).await
    }

    pub fn verses(&self) -> &dyn VerseSource {
        &*self.verses
    }

    pub fn synonyms(&self) -> &dyn SynonymSource {
        &*self.synonyms
    }
}

/// One row of the results view.
#[derive(Debug, Clone, Serialize)]
pub struct ResultRow {
    pub similarity: f64,
    pub text: String,
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
}

impl From<&RankedResult> for ResultRow {
    fn from(r: &RankedResult) -> Self {
        Self {
            similarity: r.similarity,
            text: r.verse.verse.clone(),
            book: r.verse.book.clone(),
            chapter: r.verse.chapter,
            verse: r.verse.number,
        }
    }
}

/// Run `vf search` and print the ranked verses.
pub async fn run_search(config: &Config, paragraph: &str, threshold: Option<&str>) -> Result<()> {
    if paragraph.trim().is_empty() {
        println!("No results.");
        return Ok(());
    }

    let search = VerseSearch::from_config(config)?;
    let threshold = search.threshold(threshold);

    let outcome = search.run(paragraph, threshold).await?;

    match outcome {
        SearchOutcome::NotFound => println!("No results."),
        SearchOutcome::Found(results) => {
            for (i, result) in results.iter().enumerate() {
                let row = ResultRow::from(result);
                println!(
                    "{}. [{:.4}] {} {}:{}",
                    i + 1,
                    row.similarity,
                    row.book,
                    row.chapter,
                    row.verse
                );
                println!("    {}", row.text.replace('\n', " ").trim());
                println!();
            }
        }
    }

    Ok(())
}

/// Run `vf lookup`: one verse service call, no expansion.
pub async fn run_lookup(config: &Config, word: &str) -> Result<()> {
    let search = VerseSearch::from_config(config)?;
    let verses = search.verses().lookup(word).await;

    if verses.is_empty() {
        println!("No verses.");
        return Ok(());
    }

    for v in &verses {
        println!("{} {}:{} (id {})", v.book, v.chapter, v.number, v.id);
        println!("    {}", v.verse.replace('\n', " ").trim());
    }
    println!("{} verses", verses.len());
    Ok(())
}

/// Run `vf synonyms`: one synonym service call.
pub async fn run_synonyms(config: &Config, word: &str) -> Result<()> {
    let search = VerseSearch::from_config(config)?;
    let synonyms = search.synonyms().synonyms(word).await;

    if synonyms.is_empty() {
        println!("No synonyms.");
    } else {
        for s in &synonyms {
            println!("{}", s);
        }
    }
    Ok(())
}
