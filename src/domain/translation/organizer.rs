//! Result organizer
//!
//! Reduces the outcomes of every provider to the single text shown to the
//! user plus a summary of the providers that failed.

use super::TranslateResult;

/// Primary translation and failure diagnostics for one cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizedOutcome {
    /// First non-empty successful translation, in registration order
    pub primary: Option<String>,
    /// One `provider: message` line per failed provider
    pub failures: Option<String>,
}

impl OrganizedOutcome {
    /// True when every provider failed
    pub fn is_all_failed(&self) -> bool {
        self.primary.is_none() && self.failures.is_some()
    }
}

/// Organize provider results.
///
/// The first successful, non-blank result wins; later successes are ignored
/// rather than compared. Results must be passed in provider-registration order.
pub fn organize(results: &[TranslateResult]) -> OrganizedOutcome {
    let primary = results
        .iter()
        .filter_map(TranslateResult::text)
        .find(|text| !text.trim().is_empty())
        .map(str::to_string);

    let failures: Vec<String> = results
        .iter()
        .filter_map(|r| {
            r.error_message()
                .map(|message| format!("{}: {}", r.provider_id(), message))
        })
        .collect();

    OrganizedOutcome {
        primary,
        failures: (!failures.is_empty()).then(|| failures.join("\n")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_success_wins_and_only_failures_are_reported() {
        let results = vec![
            TranslateResult::failure("p1", "E1"),
            TranslateResult::success("p2", "A"),
            TranslateResult::success("p3", "B"),
        ];

        let outcome = organize(&results);

        assert_eq!(outcome.primary.as_deref(), Some("A"));
        assert_eq!(outcome.failures.as_deref(), Some("p1: E1"));
    }

    #[test]
    fn all_failed_lists_every_provider() {
        let results = vec![
            TranslateResult::failure("p1", "timeout"),
            TranslateResult::failure("p2", "HTTP 503"),
        ];

        let outcome = organize(&results);

        assert!(outcome.primary.is_none());
        assert!(outcome.is_all_failed());
        assert_eq!(outcome.failures.as_deref(), Some("p1: timeout\np2: HTTP 503"));
    }

    #[test]
    fn all_succeeded_has_no_failures() {
        let results = vec![
            TranslateResult::success("p1", "hola"),
            TranslateResult::success("p2", "buenas"),
        ];

        let outcome = organize(&results);

        assert_eq!(outcome.primary.as_deref(), Some("hola"));
        assert!(outcome.failures.is_none());
        assert!(!outcome.is_all_failed());
    }

    #[test]
    fn blank_success_is_skipped() {
        let results = vec![
            TranslateResult::success("p1", "   "),
            TranslateResult::success("p2", "bonjour"),
        ];

        assert_eq!(organize(&results).primary.as_deref(), Some("bonjour"));
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(organize(&[]), OrganizedOutcome::default());
    }
}
