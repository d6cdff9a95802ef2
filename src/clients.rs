//! HTTP clients for the verse lookup and synonym services.
//!
//! Both clients implement the core source traits. A failed call (transport
//! error, non-success status, or a body that does not parse) is logged at
//! `warn` and contributes nothing to the search; there is no retry.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use verse_finder_core::models::{SynonymCandidate, Verse};
use verse_finder_core::source::{SynonymSource, VerseSource};

use crate::config::{Config, HttpConfig};

/// Build the shared outbound client.
pub fn build_http_client(config: &HttpConfig) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }
    builder.build().context("Failed to build HTTP client")
}

/// Body of the verse search endpoint.
#[derive(Debug, Deserialize)]
struct VerseSearchResponse {
    #[serde(default)]
    data: Vec<Verse>,
}

/// Client for `GET {base_url}/{translation}/search?q={word}`.
#[derive(Clone)]
pub struct VerseClient {
    http: reqwest::Client,
    search_url: String,
}

impl VerseClient {
    pub fn new(http: reqwest::Client, search_url: impl Into<String>) -> Self {
        Self {
            http,
            search_url: search_url.into(),
        }
    }

    pub fn from_config(http: reqwest::Client, config: &Config) -> Self {
        Self::new(http, config.verses.search_url())
    }

    /// Fetch verses for `word`, surfacing every failure as an error.
    pub async fn fetch(&self, word: &str) -> Result<Vec<Verse>> {
        let response = self
            .http
            .get(&self.search_url)
            .query(&[("q", word)])
            .send()
            .await
            .with_context(|| format!("verse lookup request for '{}' failed", word))?;

        let status = response.status();
        if !status.is_success() {
            bail!("verse lookup for '{}' returned {}", word, status);
        }

        let body: VerseSearchResponse = response
            .json()
            .await
            .with_context(|| format!("invalid verse lookup response for '{}'", word))?;
        Ok(body.data)
    }
}

#[async_trait]
impl VerseSource for VerseClient {
    async fn lookup(&self, word: &str) -> Vec<Verse> {
        match self.fetch(word).await {
            Ok(verses) => {
                debug!(word, count = verses.len(), "verse lookup");
                verses
            }
            Err(e) => {
                warn!(word, error = %format!("{:#}", e), "verse lookup failed, skipping");
                Vec::new()
            }
        }
    }
}

/// Client for `GET {url}?word={word}`.
///
/// The service answers with a JSON array of `[word, score]` pairs.
#[derive(Clone)]
pub struct SynonymClient {
    http: reqwest::Client,
    url: String,
}

impl SynonymClient {
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    pub fn from_config(http: reqwest::Client, config: &Config) -> Self {
        Self::new(http, config.synonyms.url.clone())
    }

    /// Fetch all scored candidates for `word`, unfiltered.
    pub async fn fetch(&self, word: &str) -> Result<Vec<SynonymCandidate>> {
        let response = self
            .http
            .get(&self.url)
            .query(&[("word", word)])
            .send()
            .await
            .with_context(|| format!("synonym request for '{}' failed", word))?;

        let status = response.status();
        if !status.is_success() {
            bail!("no synonyms in vocabulary for '{}': {}", word, status);
        }

        response
            .json()
            .await
            .with_context(|| format!("invalid synonym response for '{}'", word))
    }
}

#[async_trait]
impl SynonymSource for SynonymClient {
    async fn synonyms(&self, word: &str) -> Vec<String> {
        match self.fetch(word).await {
            Ok(candidates) => {
                let total = candidates.len();
                let kept: Vec<String> = candidates
                    .into_iter()
                    .filter(SynonymCandidate::qualifies)
                    .map(|c| c.word)
                    .collect();
                debug!(word, total, kept = kept.len(), "synonym lookup");
                kept
            }
            Err(e) => {
                warn!(word, error = %format!("{:#}", e), "synonym lookup failed, skipping");
                Vec::new()
            }
        }
    }
}
