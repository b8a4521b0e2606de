//! Tracing subscriber setup for hosts and examples.

use crate::constants::LOG_ENV_VAR;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "boxlog_calendar=info";

/// Install a fmt subscriber filtered by `BOXLOG_LOG`.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();

    if result.is_ok() {
        tracing::debug!("Logging initialized");
    }
}

/// Subscriber for tests: captures output through the test harness.
pub fn init_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("boxlog_calendar=trace"))
        .with_test_writer()
        .try_init();
}
