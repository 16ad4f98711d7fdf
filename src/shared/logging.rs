//! Diagnostic logging setup.
//!
//! Progress for humans goes through the `ProgressReporter` port; this module
//! only wires `tracing` events (lookups, cache hits, aborts) to stderr.

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence. Without it the level is `warn`, or `debug`
/// when `verbose` is set. Calling this twice is harmless; the second
/// installation is ignored.
pub fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bom_resolver={}", default_level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}
