//! Tracing setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Environment variable that takes precedence over `RUST_LOG`.
pub const LOG_ENV: &str = "KINDRED_LOG";

/// Filter directive for a `-v` count when no environment filter is set.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Build the filter: `KINDRED_LOG`, then `RUST_LOG`, then the verbosity.
pub fn env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)))
}

/// Install the global subscriber, logging to stderr so stdout stays clean
/// for results.
pub fn init_tracing(verbosity: u8) {
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(verbosity))
        .with_target(false);

    // fails only when a subscriber is already installed
    let _ = subscriber.try_init();
}
