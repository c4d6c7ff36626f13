//! Shared setup for the demo binaries in `src/bin/`.
//!
//! Every demo prints its walkthrough to stdout and nothing else. Diagnostics
//! go through `tracing` to stderr, filtered by `RUST_LOG` and silent below
//! `warn` by default, so the printed lines stay the same from run to run.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs the global `tracing` subscriber for a demo binary.
///
/// Calling it a second time is a no-op.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();

    if installed.is_ok() {
        tracing::debug!("tracing initialised");
    }
}
