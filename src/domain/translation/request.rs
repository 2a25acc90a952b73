//! Translate request value object

use super::LanguageCode;

/// One translation request, built once per pipeline cycle and shared
/// read-only with every provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateRequest {
    text: String,
    source_language: LanguageCode,
    target_language: LanguageCode,
}

impl TranslateRequest {
    pub fn new(
        text: impl Into<String>,
        source_language: LanguageCode,
        target_language: LanguageCode,
    ) -> Self {
        Self {
            text: text.into(),
            source_language,
            target_language,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source_language(&self) -> &LanguageCode {
        &self.source_language
    }

    pub fn target_language(&self) -> &LanguageCode {
        &self.target_language
    }
}
