//! Configuration value objects

mod app_config;

pub use app_config::{
    AnalyticsConfig, AppConfig, LibreTranslateConfig, MyMemoryConfig, AUTO_DETECT,
    DEFAULT_CACHE_CAPACITY, DEFAULT_PROVIDER_TIMEOUT_SECS, DEFAULT_QUEUE_CAPACITY,
    KNOWN_PROVIDERS,
};
