//! Tracing/logging initialization.
//!
//! Logs are JSON lines on stderr so they never interleave with command
//! output on stdout.

use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` when set and valid, otherwise `default_filter`,
/// otherwise `info`.
pub fn filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(default_filter))
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
