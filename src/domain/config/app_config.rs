//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::translation::LanguageCode;

/// Source language value that enables automatic detection
pub const AUTO_DETECT: &str = "auto";

/// Default number of pending observations in the intake queue
pub const DEFAULT_QUEUE_CAPACITY: usize = 16;

/// Default number of memoized input texts
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Default per-provider request timeout
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 10;

/// Provider ids that can appear in `providers`
pub const KNOWN_PROVIDERS: &[&str] = &["libretranslate", "mymemory"];

/// Providers queried when none are configured, in registration order
pub const DEFAULT_PROVIDERS: &[&str] = &["libretranslate", "mymemory"];

const DEFAULT_TARGET_LANGUAGE: &str = "en";
const DEFAULT_LIBRETRANSLATE_ENDPOINT: &str = "https://libretranslate.com";
const DEFAULT_MYMEMORY_ENDPOINT: &str = "https://api.mymemory.translated.net";
const DEFAULT_ANALYTICS_ENDPOINT: &str = "https://www.google-analytics.com/collect";

/// LibreTranslate provider settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LibreTranslateConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
    /// Languages the endpoint serves; unset means any
    pub supported_languages: Option<Vec<String>>,
}

/// MyMemory provider settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MyMemoryConfig {
    pub endpoint: Option<String>,
    pub email: Option<String>,
    pub timeout_secs: Option<u64>,
    pub supported_languages: Option<Vec<String>>,
}

/// Usage analytics settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    pub enabled: Option<bool>,
    pub tracking_id: Option<String>,
    pub client_id: Option<String>,
    pub endpoint: Option<String>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub target_language: Option<String>,
    pub source_language: Option<String>,
    pub providers: Option<Vec<String>>,
    pub notify: Option<bool>,
    pub queue_capacity: Option<usize>,
    pub cache_capacity: Option<usize>,
    pub min_confidence: Option<f64>,
    pub libretranslate: Option<LibreTranslateConfig>,
    pub mymemory: Option<MyMemoryConfig>,
    pub analytics: Option<AnalyticsConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            target_language: Some(DEFAULT_TARGET_LANGUAGE.to_string()),
            source_language: Some(AUTO_DETECT.to_string()),
            providers: Some(default_providers()),
            notify: Some(true),
            queue_capacity: Some(DEFAULT_QUEUE_CAPACITY),
            cache_capacity: Some(DEFAULT_CACHE_CAPACITY),
            min_confidence: Some(0.0),
            libretranslate: Some(LibreTranslateConfig {
                endpoint: Some(DEFAULT_LIBRETRANSLATE_ENDPOINT.to_string()),
                api_key: None,
                timeout_secs: Some(DEFAULT_PROVIDER_TIMEOUT_SECS),
                supported_languages: None,
            }),
            mymemory: Some(MyMemoryConfig {
                endpoint: Some(DEFAULT_MYMEMORY_ENDPOINT.to_string()),
                email: None,
                timeout_secs: Some(DEFAULT_PROVIDER_TIMEOUT_SECS),
                supported_languages: None,
            }),
            analytics: Some(AnalyticsConfig {
                enabled: Some(false),
                tracking_id: None,
                client_id: Some(uuid::Uuid::new_v4().to_string()),
                endpoint: Some(DEFAULT_ANALYTICS_ENDPOINT.to_string()),
            }),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            target_language: other.target_language.or(self.target_language),
            source_language: other.source_language.or(self.source_language),
            providers: other.providers.or(self.providers),
            notify: other.notify.or(self.notify),
            queue_capacity: other.queue_capacity.or(self.queue_capacity),
            cache_capacity: other.cache_capacity.or(self.cache_capacity),
            min_confidence: other.min_confidence.or(self.min_confidence),
            libretranslate: merge_section(self.libretranslate, other.libretranslate, |b, o| {
                LibreTranslateConfig {
                    endpoint: o.endpoint.or(b.endpoint),
                    api_key: o.api_key.or(b.api_key),
                    timeout_secs: o.timeout_secs.or(b.timeout_secs),
                    supported_languages: o.supported_languages.or(b.supported_languages),
                }
            }),
            mymemory: merge_section(self.mymemory, other.mymemory, |b, o| MyMemoryConfig {
                endpoint: o.endpoint.or(b.endpoint),
                email: o.email.or(b.email),
                timeout_secs: o.timeout_secs.or(b.timeout_secs),
                supported_languages: o.supported_languages.or(b.supported_languages),
            }),
            analytics: merge_section(self.analytics, other.analytics, |b, o| AnalyticsConfig {
                enabled: o.enabled.or(b.enabled),
                tracking_id: o.tracking_id.or(b.tracking_id),
                client_id: o.client_id.or(b.client_id),
                endpoint: o.endpoint.or(b.endpoint),
            }),
        }
    }

    /// Get target language, or "en" if not set/invalid
    pub fn target_language_or_default(&self) -> LanguageCode {
        self.target_language
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| LanguageCode::from_static(DEFAULT_TARGET_LANGUAGE))
    }

    /// Get the fixed source language, or None for automatic detection
    pub fn fixed_source_language(&self) -> Option<LanguageCode> {
        self.source_language
            .as_deref()
            .filter(|s| !s.eq_ignore_ascii_case(AUTO_DETECT))
            .and_then(|s| s.parse().ok())
    }

    /// Get the ordered list of enabled provider ids
    pub fn providers_or_default(&self) -> Vec<String> {
        self.providers.clone().unwrap_or_else(default_providers)
    }

    /// Get notify setting, or true if not set
    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(true)
    }

    /// Get intake queue capacity (at least 1)
    pub fn queue_capacity_or_default(&self) -> usize {
        self.queue_capacity
            .unwrap_or(DEFAULT_QUEUE_CAPACITY)
            .max(1)
    }

    /// Get result cache capacity; 0 means unbounded
    pub fn cache_capacity_or_default(&self) -> usize {
        self.cache_capacity.unwrap_or(DEFAULT_CACHE_CAPACITY)
    }

    /// Get minimum detection confidence in [0, 1]
    pub fn min_confidence_or_default(&self) -> f64 {
        self.min_confidence.unwrap_or(0.0).clamp(0.0, 1.0)
    }

    /// LibreTranslate section with defaults filled in
    pub fn libretranslate_or_default(&self) -> LibreTranslateConfig {
        let section = self.libretranslate.clone().unwrap_or_default();
        LibreTranslateConfig {
            endpoint: section
                .endpoint
                .or_else(|| Some(DEFAULT_LIBRETRANSLATE_ENDPOINT.to_string())),
            api_key: section.api_key,
            timeout_secs: Some(timeout_or_default(section.timeout_secs)),
            supported_languages: section.supported_languages,
        }
    }

    /// MyMemory section with defaults filled in
    pub fn mymemory_or_default(&self) -> MyMemoryConfig {
        let section = self.mymemory.clone().unwrap_or_default();
        MyMemoryConfig {
            endpoint: section
                .endpoint
                .or_else(|| Some(DEFAULT_MYMEMORY_ENDPOINT.to_string())),
            email: section.email,
            timeout_secs: Some(timeout_or_default(section.timeout_secs)),
            supported_languages: section.supported_languages,
        }
    }

    /// Whether analytics are enabled and have a tracking id
    pub fn analytics_enabled(&self) -> bool {
        self.analytics
            .as_ref()
            .map(|a| a.enabled.unwrap_or(false) && a.tracking_id.is_some())
            .unwrap_or(false)
    }

    /// Analytics endpoint, or the Google Analytics collect URL if not set
    pub fn analytics_endpoint_or_default(&self) -> &str {
        self.analytics
            .as_ref()
            .and_then(|a| a.endpoint.as_deref())
            .unwrap_or(DEFAULT_ANALYTICS_ENDPOINT)
    }
}

fn default_providers() -> Vec<String> {
    DEFAULT_PROVIDERS.iter().map(|id| id.to_string()).collect()
}

/// Provider timeouts are at least one second
fn timeout_or_default(secs: Option<u64>) -> u64 {
    secs.unwrap_or(DEFAULT_PROVIDER_TIMEOUT_SECS).max(1)
}

/// Merge an optional config section, preferring fields from `other`
fn merge_section<T>(base: Option<T>, other: Option<T>, merge: impl FnOnce(T, T) -> T) -> Option<T> {
    match (base, other) {
        (None, None) => None,
        (Some(b), None) => Some(b),
        (None, Some(o)) => Some(o),
        (Some(b), Some(o)) => Some(merge(b, o)),
    }
}
