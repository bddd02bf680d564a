//! Tracing/logging setup shared by binaries and tests.

pub mod tracing;

/// Initialize process-wide observability (tracing/logging).
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init(service: &str) {
    tracing::init(service);
}
