//! Translate result value object

/// Outcome of a single provider for a single request.
///
/// A result either carries translated text or an error message, never both,
/// so `succeeded() == false` exactly when `text()` is `None` and
/// `error_message()` is `Some`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateResult {
    provider_id: String,
    outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Outcome {
    Translated(String),
    Failed(String),
}

impl TranslateResult {
    /// Successful translation from `provider_id`
    pub fn success(provider_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            provider_id: provider_id.into(),
            outcome: Outcome::Translated(text.into()),
        }
    }

    /// Failed translation from `provider_id`
    pub fn failure(provider_id: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            provider_id: provider_id.into(),
            outcome: Outcome::Failed(error_message.into()),
        }
    }

    pub fn provider_id(&self) -> &str {
        &self.provider_id
    }

    pub fn succeeded(&self) -> bool {
        matches!(self.outcome, Outcome::Translated(_))
    }

    pub fn text(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Translated(text) => Some(text),
            Outcome::Failed(_) => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Translated(_) => None,
            Outcome::Failed(message) => Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_has_text_and_no_error() {
        let result = TranslateResult::success("mymemory", "merhaba");
        assert!(result.succeeded());
        assert_eq!(result.text(), Some("merhaba"));
        assert!(result.error_message().is_none());
        assert_eq!(result.provider_id(), "mymemory");
    }

    #[test]
    fn failure_has_error_and_no_text() {
        let result = TranslateResult::failure("libretranslate", "HTTP 500");
        assert!(!result.succeeded());
        assert!(result.text().is_none());
        assert_eq!(result.error_message(), Some("HTTP 500"));
    }
}
