//! # Verse Finder
//!
//! Finds Bible verses related to a paragraph. Each word of the paragraph,
//! and each of its synonyms, is looked up in a verse search service; the
//! collected verses are ranked by TF-IDF cosine similarity against the
//! paragraph and filtered by a user threshold.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────┐   ┌──────────────┐   ┌──────────────┐   ┌───────────┐
//! │ paragraph │──▶│   Expander   │──▶│ CandidateSet │──▶│  Ranker   │
//! └───────────┘   └──┬────────┬──┘   └──────────────┘   │  TF-IDF   │
//!                    │        │                         └─────┬─────┘
//!              ┌─────▼──┐ ┌───▼──────┐                        ▼
//!              │ Verses │ │ Synonyms │               ┌────────────────┐
//!              │  HTTP  │ │   HTTP   │               │ CLI  │  HTTP   │
//!              └────────┘ └──────────┘               └────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! vf search "el amor es paciente" --threshold 0.1
//! vf serve                       # GET /search?q=...&threshold=...
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`clients`] | HTTP verse and synonym clients |
//! | [`search`] | Pipeline wiring and CLI commands |
//! | [`server`] | HTTP search server |
//! | [`logging`] | Tracing subscriber setup |
//!
//! The pipeline itself lives in the `verse-finder-core` crate.

pub mod clients;
pub mod config;
pub mod logging;
pub mod search;
pub mod server;
