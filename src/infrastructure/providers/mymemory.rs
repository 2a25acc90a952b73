//! MyMemory provider adapter

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::LanguageSupport;
use crate::application::ports::{ProviderError, TranslationProvider};
use crate::domain::config::{MyMemoryConfig, DEFAULT_PROVIDER_TIMEOUT_SECS};
use crate::domain::error::ConfigError;
use crate::domain::translation::{TranslateRequest, TranslateResult};
use crate::infrastructure::http::client_with_timeout;

/// Provider id used in diagnostics and configuration
pub const MYMEMORY_ID: &str = "mymemory";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GetResponse {
    response_data: Option<ResponseData>,
    /// Sent as either a number or a string
    response_status: Option<Value>,
    response_details: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseData {
    translated_text: Option<String>,
}

impl GetResponse {
    fn status_code(&self) -> Option<u16> {
        match self.response_status.as_ref()? {
            Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// MyMemory provider
///
/// The service answers HTTP 200 for most failures and reports them in
/// `responseStatus` instead.
pub struct MyMemoryProvider {
    endpoint: String,
    email: Option<String>,
    timeout: Duration,
    support: LanguageSupport,
    client: reqwest::Client,
}

impl MyMemoryProvider {
    /// Create a provider for `endpoint` with its own request timeout
    pub fn new(endpoint: impl Into<String>, email: Option<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            email: email.filter(|e| !e.is_empty()),
            timeout,
            support: LanguageSupport::any(),
            client: client_with_timeout(timeout),
        }
    }

    pub fn with_supported_languages(mut self, support: LanguageSupport) -> Self {
        self.support = support;
        self
    }

    /// Create from a config section with defaults already filled in
    pub fn from_config(config: &MyMemoryConfig) -> Result<Self, ConfigError> {
        let support = LanguageSupport::from_config(
            "mymemory.supported_languages",
            config.supported_languages.as_deref(),
        )?;

        Ok(Self::new(
            config.endpoint.clone().unwrap_or_default(),
            config.email.clone(),
            Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_PROVIDER_TIMEOUT_SECS)),
        )
        .with_supported_languages(support))
    }

    fn api_url(&self) -> String {
        format!("{}/get", self.endpoint)
    }

    fn query(&self, request: &TranslateRequest) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("q", request.text().to_string()),
            (
                "langpair",
                format!(
                    "{}|{}",
                    request.source_language(),
                    request.target_language()
                ),
            ),
        ];
        if let Some(email) = &self.email {
            query.push(("de", email.clone()));
        }
        query
    }

    async fn translate(&self, request: &TranslateRequest) -> Result<String, ProviderError> {
        if !self.support.serves_pair(request) {
            return Err(ProviderError::unsupported(request));
        }

        let response = self
            .client
            .get(self.api_url())
            .timeout(self.timeout)
            .query(&self.query(request))
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ProviderError::ApiError(format!(
                "HTTP {}: {}",
                status.as_u16(),
                error_text
            )));
        }

        let response: GetResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Self::extract_text(response)
    }

    fn extract_text(response: GetResponse) -> Result<String, ProviderError> {
        match response.status_code() {
            Some(200) | None => {}
            Some(429) => return Err(ProviderError::RateLimited),
            Some(code) => {
                let details = response
                    .response_details
                    .filter(|d| !d.trim().is_empty())
                    .unwrap_or_else(|| "no details".to_string());
                return Err(ProviderError::ApiError(format!("{}: {}", code, details)));
            }
        }

        let text = response
            .response_data
            .and_then(|d| d.translated_text)
            .ok_or(ProviderError::EmptyResponse)?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }

        Ok(trimmed.to_string())
    }
}

#[async_trait]
impl TranslationProvider for MyMemoryProvider {
    fn id(&self) -> &str {
        MYMEMORY_ID
    }

    async fn fetch(&self, request: &TranslateRequest) -> TranslateResult {
        match self.translate(request).await {
            Ok(text) => TranslateResult::success(MYMEMORY_ID, text),
            Err(e) => {
                debug!(provider = MYMEMORY_ID, error = %e, "Translation failed");
                TranslateResult::failure(MYMEMORY_ID, e.to_string())
            }
        }
    }
}
