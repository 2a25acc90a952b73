//! Language detection port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::translation::LanguageCode;

/// Language detection errors
#[derive(Debug, Clone, Error)]
pub enum DetectionError {
    #[error("Could not determine the language of the text")]
    Undetermined,

    #[error("Detected '{language}' with confidence {confidence:.2}, below the required {required:.2}")]
    LowConfidence {
        language: String,
        confidence: f64,
        required: f64,
    },

    #[error("Detector error: {0}")]
    Failed(String),
}

/// Port for guessing the source language of a text
#[async_trait]
pub trait LanguageDetector: Send + Sync {
    /// Detect the language of `text`.
    ///
    /// # Returns
    /// The detected language code, or an error when no reliable guess exists
    async fn detect(&self, text: &str) -> Result<LanguageCode, DetectionError>;
}

/// Blanket implementation for boxed detector types
#[async_trait]
impl LanguageDetector for Box<dyn LanguageDetector> {
    async fn detect(&self, text: &str) -> Result<LanguageCode, DetectionError> {
        self.as_ref().detect(text).await
    }
}
