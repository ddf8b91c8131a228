//! Logging initialization.
//!
//! Installs the tracing subscriber for the command-line tool. Output goes
//! to stderr without timestamps, which reads cleanly for a one-shot CLI.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility.
///
/// Called once at startup; later calls are no-ops. The filter defaults to
/// `warn` and can be raised through `RUST_LOG`.
pub fn init() {
    INIT_ONCE.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .without_time()
            .with_target(false)
            .init();
    });
}
