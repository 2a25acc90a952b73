//! Fixed source language adapter

use async_trait::async_trait;

use crate::application::ports::{DetectionError, LanguageDetector};
use crate::domain::translation::LanguageCode;

/// Detector that always answers with a configured language
pub struct FixedLanguageDetector {
    language: LanguageCode,
}

impl FixedLanguageDetector {
    pub fn new(language: LanguageCode) -> Self {
        Self { language }
    }
}

#[async_trait]
impl LanguageDetector for FixedLanguageDetector {
    async fn detect(&self, _text: &str) -> Result<LanguageCode, DetectionError> {
        Ok(self.language.clone())
    }
}
