//! Translation provider adapters

mod libretranslate;
mod mymemory;
mod support;

pub use libretranslate::{LibreTranslateProvider, LIBRETRANSLATE_ID};
pub use mymemory::{MyMemoryProvider, MYMEMORY_ID};
pub use support::LanguageSupport;

use std::sync::Arc;

use crate::application::ports::TranslationProvider;
use crate::domain::config::{AppConfig, KNOWN_PROVIDERS};
use crate::domain::error::ConfigError;

/// Build the enabled providers in the order they are configured
pub fn create_providers(
    config: &AppConfig,
) -> Result<Vec<Arc<dyn TranslationProvider>>, ConfigError> {
    let ids = config.providers_or_default();
    let mut providers: Vec<Arc<dyn TranslationProvider>> = Vec::with_capacity(ids.len());

    for (index, raw) in ids.iter().enumerate() {
        let id = raw.trim().to_ascii_lowercase();

        if ids[..index]
            .iter()
            .any(|earlier| earlier.trim().eq_ignore_ascii_case(&id))
        {
            return Err(ConfigError::ValidationError {
                key: "providers".to_string(),
                message: format!("'{}' is listed more than once", id),
            });
        }

        let provider: Arc<dyn TranslationProvider> = match id.as_str() {
            LIBRETRANSLATE_ID => Arc::new(LibreTranslateProvider::from_config(
                &config.libretranslate_or_default(),
            )?),
            MYMEMORY_ID => Arc::new(MyMemoryProvider::from_config(
                &config.mymemory_or_default(),
            )?),
            _ => {
                return Err(ConfigError::ValidationError {
                    key: "providers".to_string(),
                    message: format!(
                        "unknown provider '{}'. Valid: {}",
                        raw,
                        KNOWN_PROVIDERS.join(", ")
                    ),
                })
            }
        };
        providers.push(provider);
    }

    if providers.is_empty() {
        return Err(ConfigError::NoProviders);
    }

    Ok(providers)
}
