//! Shared plumbing for the command-line tools: config loading, logging setup
//! and the world invariant checks run by the fuzz harness.

pub mod config_file;
pub mod invariants;

use std::io;

use tracing_subscriber::EnvFilter;

/// Logs to stderr, filtered by `RUST_LOG` and defaulting to warnings.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}
