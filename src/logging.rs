//! Logging bootstrap
//!
//! Diagnostics go to stderr through `tracing`, filtered by the `CEPBOOK_LOG`
//! environment variable (same syntax as `RUST_LOG`). The default only shows
//! warnings and errors so command output stays clean.

use std::io::IsTerminal;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV_VAR: &str = "CEPBOOK_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Build the filter from `CEPBOOK_LOG`, falling back to warnings only
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_logging();
        init_logging();
        tracing::warn!("logging initialized twice without panicking");
    }
}
