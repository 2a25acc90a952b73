//! Usage analytics port interface

use async_trait::async_trait;
use thiserror::Error;

/// Analytics errors
#[derive(Debug, Clone, Error)]
pub enum AnalyticsError {
    #[error("Analytics request failed: {0}")]
    RequestFailed(String),

    #[error("Analytics endpoint rejected the hit: HTTP {0}")]
    Rejected(u16),
}

/// Port for best-effort usage tracing
#[async_trait]
pub trait AnalyticsTracer: Send + Sync {
    /// Record a categorised event.
    async fn track_event(
        &self,
        category: &str,
        action: &str,
        label: &str,
        value: Option<i64>,
    ) -> Result<(), AnalyticsError>;

    /// Record a screen view.
    async fn track_screen(
        &self,
        app_name: &str,
        app_version: &str,
        client_id: &str,
        screen_name: &str,
    ) -> Result<(), AnalyticsError>;
}

/// Blanket implementation for boxed tracer types
#[async_trait]
impl AnalyticsTracer for Box<dyn AnalyticsTracer> {
    async fn track_event(
        &self,
        category: &str,
        action: &str,
        label: &str,
        value: Option<i64>,
    ) -> Result<(), AnalyticsError> {
        self.as_ref()
            .track_event(category, action, label, value)
            .await
    }

    async fn track_screen(
        &self,
        app_name: &str,
        app_version: &str,
        client_id: &str,
        screen_name: &str,
    ) -> Result<(), AnalyticsError> {
        self.as_ref()
            .track_screen(app_name, app_version, client_id, screen_name)
            .await
    }
}
