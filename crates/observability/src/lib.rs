//! Tracing and logging setup shared by the binaries.

/// Initialize process-wide logging with `default_filter` as the fallback level.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(default_filter: &str) {
    tracing::init(default_filter);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
