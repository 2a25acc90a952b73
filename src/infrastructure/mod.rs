//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like translation APIs, desktop
//! notifications and the config file.

pub mod analytics;
pub mod config;
pub mod detection;
mod http;
pub mod notification;
pub mod providers;

// Re-export adapters
pub use analytics::{create_tracer, GoogleAnalyticsTracer, NoopTracer};
pub use config::XdgConfigStore;
pub use detection::{create_detector, FixedLanguageDetector, WhatlangDetector};
pub use notification::{
    create_notifier, ConsoleNotifier, NotifierKind, NotifyRustNotifier,
};
pub use providers::{create_providers, LanguageSupport, LibreTranslateProvider, MyMemoryProvider};
