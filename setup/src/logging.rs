//! Development-time tracing for debugging the setup tool.
//!
//! # Separation of Concerns
//!
//! - **Tracing (this module)**: Dev diagnostics via `RUST_LOG`, output to
//!   stderr. Not persisted, not part of the setup console output.
//!
//! - **Console reporting ([`crate::run`])**: Product output on stdout.
//!   Always printed, unaffected by `RUST_LOG`. Captured child process
//!   output is surfaced only through tracing events, never on the console.

use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=setup=debug cargo run
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
