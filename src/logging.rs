//! Tracing subscriber setup.
//!
//! Logs go to stderr so `vf search` output on stdout stays clean. The level
//! comes from `RUST_LOG` (e.g. `RUST_LOG=verse_finder_core=debug`), falling
//! back to `info`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
