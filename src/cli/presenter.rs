//! CLI presenter for output formatting

use colored::*;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::application::RunSummary;

/// Presenter for CLI output formatting
///
/// Everything except translation output goes to stderr, so stdout can be
/// piped.
pub struct Presenter {
    spinner: Option<ProgressBar>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self { spinner: None }
    }

    /// Start a spinner with message
    pub fn start_spinner(&mut self, message: &str) {
        let spinner = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
        {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    /// Whether a spinner is currently shown
    pub fn is_spinner_active(&self) -> bool {
        self.spinner.is_some()
    }

    /// Mark spinner as success and finish
    pub fn spinner_success(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✓".green(), message));
        }
    }

    /// Mark spinner as failed and finish
    pub fn spinner_fail(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_with_message(format!("{} {}", "✗".red(), message));
        }
    }

    /// Stop spinner without status
    pub fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Summarize a finished watch session on stderr
    pub fn watch_summary(&self, summary: &RunSummary) {
        self.info(&Self::format_summary(summary));
    }

    fn format_summary(summary: &RunSummary) -> String {
        format!(
            "{} received, {} repeated, {} translated, {} failed",
            summary.received, summary.discarded, summary.succeeded, summary.failed
        )
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_summary_lists_counts() {
        let summary = RunSummary {
            received: 5,
            discarded: 1,
            succeeded: 3,
            failed: 1,
        };
        assert_eq!(
            Presenter::format_summary(&summary),
            "5 received, 1 repeated, 3 translated, 1 failed"
        );
    }

    #[test]
    fn spinner_lifecycle() {
        let mut presenter = Presenter::new();
        presenter.start_spinner("Translating...");
        assert!(presenter.is_spinner_active());
        presenter.spinner_fail("Translation failed");
        assert!(!presenter.is_spinner_active());
    }
}
