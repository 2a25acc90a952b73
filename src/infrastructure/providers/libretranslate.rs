//! LibreTranslate provider adapter

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::LanguageSupport;
use crate::application::ports::{ProviderError, TranslationProvider};
use crate::domain::config::{LibreTranslateConfig, DEFAULT_PROVIDER_TIMEOUT_SECS};
use crate::domain::error::ConfigError;
use crate::domain::translation::{TranslateRequest, TranslateResult};
use crate::infrastructure::http::client_with_timeout;

/// Provider id used in diagnostics and configuration
pub const LIBRETRANSLATE_ID: &str = "libretranslate";

// Request/response types for the LibreTranslate API

#[derive(Debug, Serialize)]
struct TranslateBody<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
    error: Option<String>,
}

/// LibreTranslate provider
pub struct LibreTranslateProvider {
    endpoint: String,
    api_key: Option<String>,
    timeout: Duration,
    support: LanguageSupport,
    client: reqwest::Client,
}

impl LibreTranslateProvider {
    /// Create a provider for `endpoint` with its own request timeout
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
            timeout,
            support: LanguageSupport::any(),
            client: client_with_timeout(timeout),
        }
    }

    /// Restrict the languages this endpoint is asked to translate
    pub fn with_supported_languages(mut self, support: LanguageSupport) -> Self {
        self.support = support;
        self
    }

    /// Create from a config section with defaults already filled in
    pub fn from_config(config: &LibreTranslateConfig) -> Result<Self, ConfigError> {
        let support = LanguageSupport::from_config(
            "libretranslate.supported_languages",
            config.supported_languages.as_deref(),
        )?;

        Ok(Self::new(
            config.endpoint.clone().unwrap_or_default(),
            config.api_key.clone(),
            Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_PROVIDER_TIMEOUT_SECS)),
        )
        .with_supported_languages(support))
    }

    fn api_url(&self) -> String {
        format!("{}/translate", self.endpoint)
    }

    fn build_body<'a>(&'a self, request: &'a TranslateRequest) -> TranslateBody<'a> {
        TranslateBody {
            q: request.text(),
            source: request.source_language().primary(),
            target: request.target_language().primary(),
            format: "text",
            api_key: self.api_key.as_deref(),
        }
    }

    async fn translate(&self, request: &TranslateRequest) -> Result<String, ProviderError> {
        if !self.support.serves_pair(request) {
            return Err(ProviderError::unsupported(request));
        }

        let response = self
            .client
            .post(self.api_url())
            .timeout(self.timeout)
            .json(&self.build_body(request))
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(ProviderError::InvalidApiKey);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = serde_json::from_str::<TranslateResponse>(&error_text)
                .ok()
                .and_then(|r| r.error)
                .unwrap_or(error_text);
            return Err(ProviderError::ApiError(format!(
                "HTTP {}: {}",
                status.as_u16(),
                message
            )));
        }

        let response: TranslateResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Self::extract_text(response)
    }

    fn extract_text(response: TranslateResponse) -> Result<String, ProviderError> {
        if let Some(error) = response.error {
            return Err(ProviderError::ApiError(error));
        }

        let text = response
            .translated_text
            .ok_or(ProviderError::EmptyResponse)?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }

        Ok(trimmed.to_string())
    }
}

#[async_trait]
impl TranslationProvider for LibreTranslateProvider {
    fn id(&self) -> &str {
        LIBRETRANSLATE_ID
    }

    async fn fetch(&self, request: &TranslateRequest) -> TranslateResult {
        match self.translate(request).await {
            Ok(text) => TranslateResult::success(LIBRETRANSLATE_ID, text),
            Err(e) => {
                debug!(provider = LIBRETRANSLATE_ID, error = %e, "Translation failed");
                TranslateResult::failure(LIBRETRANSLATE_ID, e.to_string())
            }
        }
    }
}
