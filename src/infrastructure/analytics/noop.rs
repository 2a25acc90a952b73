//! No-op analytics adapter

use async_trait::async_trait;

use crate::application::ports::{AnalyticsError, AnalyticsTracer};

/// Tracer that records nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTracer;

#[async_trait]
impl AnalyticsTracer for NoopTracer {
    async fn track_event(
        &self,
        _category: &str,
        _action: &str,
        _label: &str,
        _value: Option<i64>,
    ) -> Result<(), AnalyticsError> {
        Ok(())
    }

    async fn track_screen(
        &self,
        _app_name: &str,
        _app_version: &str,
        _client_id: &str,
        _screen_name: &str,
    ) -> Result<(), AnalyticsError> {
        Ok(())
    }
}
