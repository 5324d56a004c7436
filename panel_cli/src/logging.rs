//! Logging setup for the CLI
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - per-case and per-calculation details
//! - `RUST_LOG=panel_core::harness=warn` - module-level filtering
//!
//! Without RUST_LOG the level is `warn`, or `debug` with `--verbose`.
//! Everything goes to stderr so stdout carries only the report.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize the tracing subscriber.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(console_layer).init();
}
