use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Environment switch for JSON log lines
pub const LOG_JSON_ENV: &str = "CRMDESK_LOG_JSON";

const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber.
///
/// Filtering follows `RUST_LOG` (default `info`). Output goes to stderr so
/// rendered pages on stdout stay clean. Calling this twice is harmless.
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);

    let _ = if json { builder.json().try_init() } else { builder.compact().try_init() };
}

/// Log the outcome of a page load or action with structured fields.
///
/// `route` must be a route path, never user input.
#[inline]
pub fn log_page_execution(route: &str, action: &str, elapsed: Duration, success: bool) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    if success {
        info!(route, action, duration_ms, "page_execution_success");
    } else {
        warn!(route, action, duration_ms, "page_execution_failure");
    }
}
