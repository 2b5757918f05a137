//! Logging setup shared by the binaries.

use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "warn";

/// Installs the global `tracing` subscriber.
///
/// Logs go to stderr so that stdout carries only the report.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
