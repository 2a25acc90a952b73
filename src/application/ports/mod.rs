//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod analytics;
pub mod config;
pub mod language_detector;
pub mod notifier;
pub mod translator;

// Re-export common types
pub use analytics::{AnalyticsError, AnalyticsTracer};
pub use config::ConfigStore;
pub use language_detector::{DetectionError, LanguageDetector};
pub use notifier::{NotificationError, NotificationIcon, Notifier};
pub use translator::{ProviderError, TranslationProvider};
