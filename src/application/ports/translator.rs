//! Translation provider port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::translation::{TranslateRequest, TranslateResult};

/// Errors a provider adapter can hit while talking to its service.
///
/// These never leave the adapter as errors: `TranslationProvider::fetch`
/// folds them into a failed `TranslateResult`.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("Request timed out")]
    Timeout,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Empty translation response")]
    EmptyResponse,

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Language pair not supported: {0} -> {1}")]
    UnsupportedLanguagePair(String, String),
}

impl ProviderError {
    /// Rejection of a request the provider does not serve
    pub fn unsupported(request: &TranslateRequest) -> Self {
        Self::UnsupportedLanguagePair(
            request.source_language().to_string(),
            request.target_language().to_string(),
        )
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_decode() {
            Self::ParseError(e.to_string())
        } else {
            Self::RequestFailed(e.to_string())
        }
    }
}

/// Port for a translation service.
///
/// Implementations must bound their own resolution time and must never
/// panic or return early with an error: every failure is a failed result.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Stable identifier used in failure diagnostics
    fn id(&self) -> &str;

    /// Translate the request text.
    async fn fetch(&self, request: &TranslateRequest) -> TranslateResult;
}
