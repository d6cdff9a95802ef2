//! TOML configuration.
//!
//! Every section is optional; omitted keys fall back to the public
//! services the search was built against. See `config/vf.example.toml`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use verse_finder_core::DEFAULT_THRESHOLD;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub verses: VersesConfig,
    #[serde(default)]
    pub synonyms: SynonymsConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Verse lookup service.
#[derive(Debug, Deserialize, Clone)]
pub struct VersesConfig {
    #[serde(default = "default_verses_base_url")]
    pub base_url: String,
    /// Translation code inserted into the search path (e.g. `nvi`).
    #[serde(default = "default_translation")]
    pub translation: String,
}

impl Default for VersesConfig {
    fn default() -> Self {
        Self {
            base_url: default_verses_base_url(),
            translation: default_translation(),
        }
    }
}

fn default_verses_base_url() -> String {
    "https://bible-api.deno.dev/api/read".to_string()
}
fn default_translation() -> String {
    "nvi".to_string()
}

impl VersesConfig {
    /// Full search endpoint: `{base_url}/{translation}/search`.
    pub fn search_url(&self) -> String {
        format!(
            "{}/{}/search",
            self.base_url.trim_end_matches('/'),
            self.translation
        )
    }
}

/// Synonym service.
#[derive(Debug, Deserialize, Clone)]
pub struct SynonymsConfig {
    #[serde(default = "default_synonyms_url")]
    pub url: String,
}

impl Default for SynonymsConfig {
    fn default() -> Self {
        Self {
            url: default_synonyms_url(),
        }
    }
}

fn default_synonyms_url() -> String {
    "http://127.0.0.1:5000/".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Threshold used when a request omits it or sends garbage.
    #[serde(default = "default_threshold")]
    pub default_threshold: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_threshold: default_threshold(),
        }
    }
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

/// Outbound HTTP client settings.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct HttpConfig {
    /// Per-request timeout. Unset means the client default (none).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl HttpConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:8000".to_string()
}

impl Config {
    /// All-default configuration, used when no config file exists.
    pub fn minimal() -> Self {
        Self::default()
    }

    /// Check values that deserialize fine but cannot work.
    pub fn validate(&self) -> Result<()> {
        check_url("verses.base_url", &self.verses.base_url)?;
        check_url("synonyms.url", &self.synonyms.url)?;

        if self.verses.translation.trim().is_empty() {
            anyhow::bail!("verses.translation must not be empty");
        }

        if !self.search.default_threshold.is_finite() {
            anyhow::bail!("search.default_threshold must be a finite number");
        }

        if self.http.timeout_secs == Some(0) {
            anyhow::bail!("http.timeout_secs must be > 0 when set");
        }

        if self.server.bind.trim().is_empty() {
            anyhow::bail!("server.bind must not be empty");
        }

        Ok(())
    }
}

fn check_url(key: &str, url: &str) -> Result<()> {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        anyhow::bail!("{} must start with http:// or https://, got '{}'", key, url);
    }
    Ok(())
}

pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).with_context(|| "Failed to parse config file")?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&content)
}

/// Load `path` if it exists, otherwise fall back to [`Config::minimal`].
///
/// A file that exists but fails to parse or validate is still an error.
pub fn load_or_default(path: &Path) -> Result<Config> {
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        Ok(Config::minimal())
    }
}
