//! Tracing and logging (shared setup).

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filter, output format).
pub mod tracing;

pub use self::tracing::{LogFormat, TracingConfig};
