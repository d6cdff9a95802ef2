//! # Verse Finder CLI (`vf`)
//!
//! Search for verses from the terminal or start the HTTP search server.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `vf search "<paragraph>"` | Expand, rank and print matching verses |
//! | `vf serve` | Start the HTTP search server |
//! | `vf lookup <word>` | Call the verse service once |
//! | `vf synonyms <word>` | Call the synonym service once |
//!
//! ## Examples
//!
//! ```bash
//! vf search "el amor es paciente" --threshold 0.1
//! vf --config ./config/vf.toml serve
//! RUST_LOG=verse_finder_core=debug vf search "paz"
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use verse_finder::{config, logging, search, server};

/// Verse Finder — find Bible verses related to a paragraph.
#[derive(Parser)]
#[command(
    name = "vf",
    about = "Find Bible verses related to a paragraph",
    version,
    long_about = "Verse Finder looks up every word of a paragraph and its synonyms in a verse \
    search service, then ranks the collected verses by TF-IDF cosine similarity against \
    the paragraph."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/vf.toml`. When the file does not exist the
    /// built-in defaults are used.
    #[arg(long, global = true, default_value = "./config/vf.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search verses related to a paragraph.
    Search {
        /// The paragraph to search for.
        paragraph: String,

        /// Minimum similarity. Values that do not parse fall back to the
        /// configured default.
        #[arg(long, allow_hyphen_values = true)]
        threshold: Option<String>,
    },

    /// Start the HTTP search server.
    ///
    /// Binds to the address configured in `[server].bind`.
    Serve,

    /// Look up verses for a single word (no synonym expansion).
    Lookup {
        word: String,
    },

    /// List the qualifying synonyms of a single word.
    Synonyms {
        word: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init();

    let cfg = config::load_or_default(&cli.config)?;

    match cli.command {
        Commands::Search {
            paragraph,
            threshold,
        } => {
            search::run_search(&cfg, &paragraph, threshold.as_deref()).await?;
        }
        Commands::Serve => {
            server::run_server(&cfg).await?;
        }
        Commands::Lookup { word } => {
            search::run_lookup(&cfg, &word).await?;
        }
        Commands::Synonyms { word } => {
            search::run_synonyms(&cfg, &word).await?;
        }
    }

    Ok(())
}
