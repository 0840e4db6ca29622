// Logging for the CLI, powered by tracing-subscriber.
//
// Events go to stderr so they never interleave with the rendered screen.
// The filter comes from RUST_LOG and falls back to DEFAULT_LEVEL.

use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LEVEL: &str = "warn";

/// Build the filter from `RUST_LOG`, or `DEFAULT_LEVEL` when unset or invalid.
fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_logging() {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(build_env_filter())
        .with(console_layer)
        .try_init();
}
