//! Development-time tracing for debugging executor runs.
//!
//! Diagnostics go to stderr and are controlled via `RUST_LOG`; they are
//! not part of any execution result returned to callers.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber for development logging.
///
/// Reads `RUST_LOG`, defaulting to `warn` when unset. Safe to call from
/// binaries and examples; panics if a global subscriber is already set.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
