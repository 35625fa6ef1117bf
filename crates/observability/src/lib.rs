//! Tracing, logging (shared setup).

/// Initialize process-wide observability with JSON output (server default).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::LogFormat::Json);
}

/// Initialize with compact human-readable output (interactive binaries).
pub fn init_compact() {
    tracing::init(tracing::LogFormat::Compact);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
