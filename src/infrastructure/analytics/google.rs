//! Google Analytics Measurement Protocol (v1) adapter

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::{AnalyticsError, AnalyticsTracer};
use crate::infrastructure::http::client_with_timeout;

const PROTOCOL_VERSION: &str = "1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Sends event and screen view hits to a collect endpoint
pub struct GoogleAnalyticsTracer {
    endpoint: String,
    tracking_id: String,
    client_id: String,
    client: reqwest::Client,
}

impl GoogleAnalyticsTracer {
    pub fn new(
        endpoint: impl Into<String>,
        tracking_id: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            tracking_id: tracking_id.into(),
            client_id: client_id.into(),
            client: client_with_timeout(REQUEST_TIMEOUT),
        }
    }

    fn event_params(
        &self,
        category: &str,
        action: &str,
        label: &str,
        value: Option<i64>,
    ) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("v", PROTOCOL_VERSION.to_string()),
            ("tid", self.tracking_id.clone()),
            ("cid", self.client_id.clone()),
            ("t", "event".to_string()),
            ("ec", category.to_string()),
            ("ea", action.to_string()),
            ("el", label.to_string()),
        ];
        if let Some(value) = value {
            params.push(("ev", value.to_string()));
        }
        params
    }

    fn screen_params(
        &self,
        app_name: &str,
        app_version: &str,
        client_id: &str,
        screen_name: &str,
    ) -> Vec<(&'static str, String)> {
        vec![
            ("v", PROTOCOL_VERSION.to_string()),
            ("tid", self.tracking_id.clone()),
            ("cid", client_id.to_string()),
            ("t", "screenview".to_string()),
            ("an", app_name.to_string()),
            ("av", app_version.to_string()),
            ("cd", screen_name.to_string()),
        ]
    }

    async fn send(&self, params: &[(&'static str, String)]) -> Result<(), AnalyticsError> {
        let response = self
            .client
            .post(&self.endpoint)
            .timeout(REQUEST_TIMEOUT)
            .form(params)
            .send()
            .await
            .map_err(|e| AnalyticsError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalyticsError::Rejected(status.as_u16()));
        }

        debug!(hit_type = %params[3].1, "Analytics hit sent");
        Ok(())
    }
}

#[async_trait]
impl AnalyticsTracer for GoogleAnalyticsTracer {
    async fn track_event(
        &self,
        category: &str,
        action: &str,
        label: &str,
        value: Option<i64>,
    ) -> Result<(), AnalyticsError> {
        self.send(&self.event_params(category, action, label, value))
            .await
    }

    async fn track_screen(
        &self,
        app_name: &str,
        app_version: &str,
        client_id: &str,
        screen_name: &str,
    ) -> Result<(), AnalyticsError> {
        self.send(&self.screen_params(app_name, app_version, client_id, screen_name))
            .await
    }
}
