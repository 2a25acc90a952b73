//! Logging setup

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "CLIPTRANS_LOG";

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "warn,cliptrans=debug";

/// Install the global subscriber, writing to stderr.
///
/// `-v` wins over `CLIPTRANS_LOG`; otherwise the variable is used when it
/// parses, falling back to warnings only.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    // A second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
