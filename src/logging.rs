//! Tracing setup for the CLI
//!
//! Configure via the RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs (sniffer fallbacks, skipped records)
//! - `RUST_LOG=dataconv::convert=trace` - module-level filtering

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber. Diagnostics go to stderr so they never
/// mix with rendered output on stdout.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
