//! whatlang language detection adapter
//!
//! Runs offline. Trigram detection is unreliable on very short input, so a
//! minimum confidence can be required before a guess is accepted.

use async_trait::async_trait;
use tracing::debug;
use whatlang::Lang;

use crate::application::ports::{DetectionError, LanguageDetector};
use crate::domain::translation::LanguageCode;

/// Offline detector backed by whatlang
pub struct WhatlangDetector {
    min_confidence: f64,
}

impl WhatlangDetector {
    /// Create a detector accepting guesses at or above `min_confidence`
    pub fn new(min_confidence: f64) -> Self {
        Self {
            min_confidence: min_confidence.clamp(0.0, 1.0),
        }
    }

    fn detect_sync(&self, text: &str) -> Result<LanguageCode, DetectionError> {
        let info = whatlang::detect(text).ok_or(DetectionError::Undetermined)?;
        let code = iso_639_1(info.lang());

        debug!(
            language = code,
            confidence = info.confidence(),
            reliable = info.is_reliable(),
            "whatlang guess"
        );

        if info.confidence() < self.min_confidence {
            return Err(DetectionError::LowConfidence {
                language: code.to_string(),
                confidence: info.confidence(),
                required: self.min_confidence,
            });
        }

        code.parse::<LanguageCode>()
            .map_err(|e| DetectionError::Failed(e.to_string()))
    }
}

impl Default for WhatlangDetector {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[async_trait]
impl LanguageDetector for WhatlangDetector {
    async fn detect(&self, text: &str) -> Result<LanguageCode, DetectionError> {
        if text.trim().is_empty() {
            return Err(DetectionError::Undetermined);
        }
        self.detect_sync(text)
    }
}

/// Map to the two-letter code translation services expect.
///
/// Languages without a two-letter code keep whatlang's ISO 639-3 code.
fn iso_639_1(lang: Lang) -> &'static str {
    use whatlang::Lang::*;
    match lang {
        Afr => "af",
        Ara => "ar",
        Aze => "az",
        Bel => "be",
        Ben => "bn",
        Bul => "bg",
        Cat => "ca",
        Ces => "cs",
        Cmn => "zh",
        Dan => "da",
        Deu => "de",
        Ell => "el",
        Eng => "en",
        Epo => "eo",
        Est => "et",
        Fin => "fi",
        Fra => "fr",
        Heb => "he",
        Hin => "hi",
        Hrv => "hr",
        Hun => "hu",
        Ind => "id",
        Ita => "it",
        Jpn => "ja",
        Kat => "ka",
        Kor => "ko",
        Lit => "lt",
        Lav => "lv",
        Mkd => "mk",
        Nld => "nl",
        Nob => "nb",
        Pes => "fa",
        Pol => "pl",
        Por => "pt",
        Ron => "ro",
        Rus => "ru",
        Slk => "sk",
        Slv => "sl",
        Spa => "es",
        Srp => "sr",
        Swe => "sv",
        Tam => "ta",
        Tel => "te",
        Tha => "th",
        Tur => "tr",
        Ukr => "uk",
        Urd => "ur",
        Vie => "vi",
        other => other.code(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn detects_english() {
        let detector = WhatlangDetector::default();
        let language = detector
            .detect("The quick brown fox jumps over the lazy dog near the river bank")
            .await
            .unwrap();
        assert_eq!(language.as_str(), "en");
    }

    #[tokio::test]
    async fn detects_russian() {
        let detector = WhatlangDetector::default();
        let language = detector
            .detect("Съешь же ещё этих мягких французских булок, да выпей чаю")
            .await
            .unwrap();
        assert_eq!(language.as_str(), "ru");
    }

    #[tokio::test]
    async fn blank_text_is_undetermined() {
        let detector = WhatlangDetector::default();
        assert!(matches!(
            detector.detect("   ").await,
            Err(DetectionError::Undetermined)
        ));
    }

    #[tokio::test]
    async fn digits_only_is_undetermined() {
        let detector = WhatlangDetector::default();
        assert!(detector.detect("12345 67890").await.is_err());
    }

    #[tokio::test]
    async fn impossible_threshold_rejects_guess() {
        let detector = WhatlangDetector::new(1.0);
        let result = detector.detect("hi").await;
        assert!(matches!(
            result,
            Err(DetectionError::LowConfidence { .. }) | Err(DetectionError::Undetermined)
        ));
    }

    #[test]
    fn iso_mapping_prefers_two_letters() {
        assert_eq!(iso_639_1(Lang::Eng), "en");
        assert_eq!(iso_639_1(Lang::Cmn), "zh");
        assert_eq!(iso_639_1(Lang::Pes), "fa");
    }
}
