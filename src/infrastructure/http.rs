//! Shared HTTP client construction

use std::time::Duration;

use tracing::warn;

/// Build a client whose requests give up after `timeout`.
///
/// Callers also set the timeout on each request, so the fallback client
/// still bounds every call.
pub(crate) fn client_with_timeout(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|e| {
            warn!(error = %e, "Failed to build HTTP client, falling back to defaults");
            reqwest::Client::default()
        })
}
