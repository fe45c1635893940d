//! Tracing bootstrap for the binary.
//!
//! Events go to stderr so that stdout stays reserved for command output.
//! `RUST_LOG` always wins over the configured level.

use tracing_subscriber::EnvFilter;

/// Picks the filter directive: `debug` when verbose, otherwise `default_level`.
pub fn filter_directive(default_level: &str, verbose: bool) -> String {
    if verbose {
        "debug".to_string()
    } else {
        default_level.to_string()
    }
}

fn build_filter(default_level: &str, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(default_level, verbose)))
}

/// Installs the global subscriber. Returns `false` if one was already set,
/// which is not an error: tests and embedders may have installed their own.
pub fn init_logging(default_level: &str, verbose: bool) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(default_level, verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
