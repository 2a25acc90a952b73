//! Usage analytics adapters

mod google;
mod noop;

pub use google::GoogleAnalyticsTracer;
pub use noop::NoopTracer;

use crate::application::ports::AnalyticsTracer;
use crate::domain::config::AppConfig;

/// Create the tracer for the current configuration
///
/// Falls back to a no-op unless analytics are enabled with a tracking id.
pub fn create_tracer(config: &AppConfig) -> Box<dyn AnalyticsTracer> {
    let tracking_id = config
        .analytics
        .as_ref()
        .and_then(|a| a.tracking_id.clone());

    match tracking_id {
        Some(tracking_id) if config.analytics_enabled() => {
            let client_id = config
                .analytics
                .as_ref()
                .and_then(|a| a.client_id.clone())
                .unwrap_or_default();
            Box::new(GoogleAnalyticsTracer::new(
                config.analytics_endpoint_or_default(),
                tracking_id,
                client_id,
            ))
        }
        _ => Box::new(NoopTracer),
    }
}
