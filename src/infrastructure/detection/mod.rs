//! Language detection adapters

mod fixed;
mod whatlang;

pub use fixed::FixedLanguageDetector;
pub use whatlang::WhatlangDetector;

use crate::application::ports::LanguageDetector;
use crate::domain::config::AppConfig;

/// Create the detector for the configured source language
///
/// A fixed `source_language` skips detection entirely.
pub fn create_detector(config: &AppConfig) -> Box<dyn LanguageDetector> {
    match config.fixed_source_language() {
        Some(language) => Box::new(FixedLanguageDetector::new(language)),
        None => Box::new(WhatlangDetector::new(config.min_confidence_or_default())),
    }
}
