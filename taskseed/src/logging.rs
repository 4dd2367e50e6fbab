//! Diagnostic tracing for taskseed.
//!
//! Tracing goes to stderr and is controlled by `RUST_LOG`. Progress lines
//! printed by [`crate::cli`] are product output and are always shown.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset.
///
/// # Example
/// ```bash
/// RUST_LOG=taskseed=debug seed-helidon
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
