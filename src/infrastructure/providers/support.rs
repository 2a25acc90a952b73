//! Languages a provider endpoint can serve

use crate::domain::error::ConfigError;
use crate::domain::translation::{LanguageCode, TranslateRequest};

/// Set of languages a provider accepts. Unrestricted by default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageSupport {
    languages: Option<Vec<LanguageCode>>,
}

impl LanguageSupport {
    /// Accept every language
    pub fn any() -> Self {
        Self::default()
    }

    /// Accept only `languages`
    pub fn only(languages: Vec<LanguageCode>) -> Self {
        Self {
            languages: Some(languages),
        }
    }

    /// Parse a configured `supported_languages` list
    pub fn from_config(key: &str, languages: Option<&[String]>) -> Result<Self, ConfigError> {
        let Some(raw) = languages else {
            return Ok(Self::any());
        };

        let invalid = |message: String| ConfigError::ValidationError {
            key: key.to_string(),
            message,
        };

        if raw.is_empty() {
            return Err(invalid("list at least one language or remove the key".to_string()));
        }

        let languages = raw
            .iter()
            .map(|s| s.parse::<LanguageCode>().map_err(|e| invalid(e.to_string())))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::only(languages))
    }

    /// Whether `language` is accepted. A bare `pt` entry also covers `pt-BR`.
    pub fn serves(&self, language: &LanguageCode) -> bool {
        match &self.languages {
            None => true,
            Some(languages) => languages.iter().any(|supported| {
                supported == language
                    || (supported.as_str() == supported.primary()
                        && supported.primary() == language.primary())
            }),
        }
    }

    /// Whether both ends of the request are accepted
    pub fn serves_pair(&self, request: &TranslateRequest) -> bool {
        self.serves(request.source_language()) && self.serves(request.target_language())
    }
}
