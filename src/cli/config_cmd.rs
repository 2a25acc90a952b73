//! Config command handler

use std::str::FromStr;

use crate::application::ports::ConfigStore;
use crate::domain::config::{
    AnalyticsConfig, AppConfig, LibreTranslateConfig, MyMemoryConfig, AUTO_DETECT,
    KNOWN_PROVIDERS,
};
use crate::domain::error::ConfigError;
use crate::domain::translation::LanguageCode;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    ensure_valid_key(key)?;

    let mut config = store.load().await?;
    set_value(&mut config, key, value)?;
    store.save(&config).await?;

    let shown = display_value(&config, key).unwrap_or_else(|| NOT_SET.to_string());
    presenter.success(&format!("{} = {}", key, shown));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    ensure_valid_key(key)?;

    let config = store.load().await?;
    match display_value(&config, key) {
        Some(v) => presenter.output(&v),
        None => presenter.output(NOT_SET),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        let value = display_value(&config, key).unwrap_or_else(|| NOT_SET.to_string());
        presenter.key_value(key, &value);
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn ensure_valid_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        })
    }
}

/// Apply a validated `value` for `key` to the config
fn set_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "target_language" => {
            config.target_language = Some(parse_language(key, value)?.to_string());
        }
        "source_language" => {
            config.source_language = Some(if value.trim().eq_ignore_ascii_case(AUTO_DETECT) {
                AUTO_DETECT.to_string()
            } else {
                parse_language(key, value)?.to_string()
            });
        }
        "providers" => config.providers = Some(parse_providers(key, value)?),
        "notify" => config.notify = Some(parse_bool_value(key, value)?),
        "queue_capacity" => config.queue_capacity = Some(parse_number(key, value)?),
        "cache_capacity" => config.cache_capacity = Some(parse_number(key, value)?),
        "min_confidence" => {
            let confidence: f64 = parse_number(key, value)?;
            if !(0.0..=1.0).contains(&confidence) {
                return Err(invalid(key, "Value must be between 0.0 and 1.0"));
            }
            config.min_confidence = Some(confidence);
        }
        "libretranslate.endpoint" => {
            libretranslate(config).endpoint = Some(parse_endpoint(key, value)?)
        }
        "libretranslate.api_key" => libretranslate(config).api_key = Some(value.to_string()),
        "libretranslate.timeout_secs" => {
            libretranslate(config).timeout_secs = Some(parse_timeout(key, value)?)
        }
        "libretranslate.supported_languages" => {
            libretranslate(config).supported_languages = Some(parse_languages(key, value)?)
        }
        "mymemory.endpoint" => mymemory(config).endpoint = Some(parse_endpoint(key, value)?),
        "mymemory.email" => mymemory(config).email = Some(value.to_string()),
        "mymemory.timeout_secs" => mymemory(config).timeout_secs = Some(parse_timeout(key, value)?),
        "mymemory.supported_languages" => {
            mymemory(config).supported_languages = Some(parse_languages(key, value)?)
        }
        "analytics.enabled" => analytics(config).enabled = Some(parse_bool_value(key, value)?),
        "analytics.tracking_id" => analytics(config).tracking_id = Some(value.to_string()),
        "analytics.client_id" => analytics(config).client_id = Some(value.to_string()),
        "analytics.endpoint" => analytics(config).endpoint = Some(parse_endpoint(key, value)?),
        _ => return Err(invalid(key, "Unknown key")),
    }
    Ok(())
}

/// Render the value stored under `key`, masking secrets
fn display_value(config: &AppConfig, key: &str) -> Option<String> {
    let libre = config.libretranslate.as_ref();
    let memory = config.mymemory.as_ref();
    let analytics = config.analytics.as_ref();

    match key {
        "target_language" => config.target_language.clone(),
        "source_language" => config.source_language.clone(),
        "providers" => config.providers.as_ref().map(|p| p.join(",")),
        "notify" => config.notify.map(|b| b.to_string()),
        "queue_capacity" => config.queue_capacity.map(|n| n.to_string()),
        "cache_capacity" => config.cache_capacity.map(|n| n.to_string()),
        "min_confidence" => config.min_confidence.map(|n| n.to_string()),
        "libretranslate.endpoint" => libre.and_then(|l| l.endpoint.clone()),
        "libretranslate.api_key" => libre.and_then(|l| l.api_key.as_deref()).map(mask_api_key),
        "libretranslate.timeout_secs" => libre.and_then(|l| l.timeout_secs).map(|n| n.to_string()),
        "libretranslate.supported_languages" => {
            libre.and_then(|l| l.supported_languages.as_ref()).map(|l| l.join(","))
        }
        "mymemory.endpoint" => memory.and_then(|m| m.endpoint.clone()),
        "mymemory.email" => memory.and_then(|m| m.email.clone()),
        "mymemory.timeout_secs" => memory.and_then(|m| m.timeout_secs).map(|n| n.to_string()),
        "mymemory.supported_languages" => {
            memory.and_then(|m| m.supported_languages.as_ref()).map(|l| l.join(","))
        }
        "analytics.enabled" => analytics.and_then(|a| a.enabled).map(|b| b.to_string()),
        "analytics.tracking_id" => analytics.and_then(|a| a.tracking_id.clone()),
        "analytics.client_id" => analytics.and_then(|a| a.client_id.clone()),
        "analytics.endpoint" => analytics.and_then(|a| a.endpoint.clone()),
        _ => None,
    }
}

fn libretranslate(config: &mut AppConfig) -> &mut LibreTranslateConfig {
    config.libretranslate.get_or_insert_with(Default::default)
}

fn mymemory(config: &mut AppConfig) -> &mut MyMemoryConfig {
    config.mymemory.get_or_insert_with(Default::default)
}

fn analytics(config: &mut AppConfig) -> &mut AnalyticsConfig {
    config.analytics.get_or_insert_with(Default::default)
}

fn invalid(key: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        key: key.to_string(),
        message: message.into(),
    }
}

fn parse_language(key: &str, value: &str) -> Result<LanguageCode, ConfigError> {
    value
        .parse::<LanguageCode>()
        .map_err(|e| invalid(key, e.to_string()))
}

fn parse_languages(key: &str, value: &str) -> Result<Vec<String>, ConfigError> {
    let languages = value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| parse_language(key, s).map(|code| code.to_string()))
        .collect::<Result<Vec<_>, _>>()?;

    if languages.is_empty() {
        return Err(invalid(key, "At least one language is required"));
    }
    Ok(languages)
}

fn parse_providers(key: &str, value: &str) -> Result<Vec<String>, ConfigError> {
    let ids: Vec<String> = value
        .split(',')
        .map(|s| s.trim().to_ascii_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    if ids.is_empty() {
        return Err(invalid(key, "At least one provider is required"));
    }

    if let Some(unknown) = ids.iter().find(|id| !KNOWN_PROVIDERS.contains(&id.as_str())) {
        return Err(invalid(
            key,
            format!(
                "Invalid provider '{}'. Valid: {}",
                unknown,
                KNOWN_PROVIDERS.join(", ")
            ),
        ));
    }

    Ok(ids)
}

fn parse_bool_value(key: &str, value: &str) -> Result<bool, ConfigError> {
    parse_bool(value).map_err(|_| invalid(key, "Value must be 'true' or 'false'"))
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(key, format!("'{}' is not a valid number", value)))
}

fn parse_timeout(key: &str, value: &str) -> Result<u64, ConfigError> {
    let secs: u64 = parse_number(key, value)?;
    if secs == 0 {
        return Err(invalid(key, "Timeout must be at least 1 second"));
    }
    Ok(secs)
}

fn parse_endpoint(key: &str, value: &str) -> Result<String, ConfigError> {
    let value = value.trim();
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(value.to_string())
    } else {
        Err(invalid(key, "Endpoint must start with http:// or https://"))
    }
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}

/// Mask API key for display (show first 4 and last 4 chars)
fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_values() {
        assert_eq!(parse_bool("true"), Ok(true));
        assert_eq!(parse_bool("NO"), Ok(false));
        assert_eq!(parse_bool("1"), Ok(true));
        assert!(parse_bool("maybe").is_err());
    }

    #[test]
    fn mask_api_key_long() {
        assert_eq!(mask_api_key("abcdefghijklmnop"), "abcd...mnop");
    }

    #[test]
    fn mask_api_key_short() {
        assert_eq!(mask_api_key("short"), "*****");
    }

    #[test]
    fn set_language_normalises() {
        let mut config = AppConfig::empty();
        set_value(&mut config, "target_language", "ZH_cn").unwrap();
        assert_eq!(config.target_language.as_deref(), Some("zh-CN"));
    }

    #[test]
    fn set_language_rejects_garbage() {
        let mut config = AppConfig::empty();
        assert!(set_value(&mut config, "target_language", "klingon").is_err());
        assert!(config.target_language.is_none());
    }

    #[test]
    fn set_source_language_accepts_auto() {
        let mut config = AppConfig::empty();
        set_value(&mut config, "source_language", "AUTO").unwrap();
        assert_eq!(config.source_language.as_deref(), Some("auto"));
    }

    #[test]
    fn set_providers_validates_ids() {
        let mut config = AppConfig::empty();
        set_value(&mut config, "providers", "LibreTranslate, mymemory").unwrap();
        assert_eq!(
            config.providers,
            Some(vec!["libretranslate".to_string(), "mymemory".to_string()])
        );

        let err = set_value(&mut config, "providers", "mymemory,bing").unwrap_err();
        assert!(err.to_string().contains("bing"));
        assert!(set_value(&mut config, "providers", " , ").is_err());
    }

    #[test]
    fn set_nested_keys_create_sections() {
        let mut config = AppConfig::empty();
        set_value(&mut config, "libretranslate.timeout_secs", "3").unwrap();
        set_value(&mut config, "analytics.enabled", "yes").unwrap();

        assert_eq!(config.libretranslate.unwrap().timeout_secs, Some(3));
        assert_eq!(config.analytics.unwrap().enabled, Some(true));
    }

    #[test]
    fn set_rejects_bad_numbers() {
        let mut config = AppConfig::empty();
        assert!(set_value(&mut config, "queue_capacity", "many").is_err());
        assert!(set_value(&mut config, "min_confidence", "1.5").is_err());
        assert!(set_value(&mut config, "mymemory.timeout_secs", "0").is_err());
    }

    #[test]
    fn set_supported_languages_normalises_list() {
        let mut config = AppConfig::empty();
        set_value(&mut config, "mymemory.supported_languages", "EN, pt_br").unwrap();
        assert_eq!(
            display_value(&config, "mymemory.supported_languages").as_deref(),
            Some("en,pt-BR")
        );

        assert!(set_value(&mut config, "mymemory.supported_languages", "en,orcish").is_err());
        assert!(set_value(&mut config, "libretranslate.supported_languages", " , ").is_err());
    }

    #[test]
    fn set_rejects_bad_endpoint() {
        let mut config = AppConfig::empty();
        assert!(set_value(&mut config, "libretranslate.endpoint", "localhost:5000").is_err());
        assert!(set_value(&mut config, "libretranslate.endpoint", "http://localhost:5000").is_ok());
    }

    #[test]
    fn display_masks_api_key() {
        let mut config = AppConfig::empty();
        set_value(&mut config, "libretranslate.api_key", "0123456789abcdef").unwrap();
        assert_eq!(
            display_value(&config, "libretranslate.api_key").as_deref(),
            Some("0123...cdef")
        );
    }

    #[test]
    fn display_unset_is_none() {
        let config = AppConfig::empty();
        for key in VALID_CONFIG_KEYS {
            assert!(display_value(&config, key).is_none(), "{key} should be unset");
        }
    }

    #[test]
    fn every_valid_key_is_settable() {
        let samples = [
            ("target_language", "de"),
            ("source_language", "fr"),
            ("providers", "mymemory"),
            ("notify", "false"),
            ("queue_capacity", "4"),
            ("cache_capacity", "0"),
            ("min_confidence", "0.5"),
            ("libretranslate.endpoint", "https://lt.example"),
            ("libretranslate.api_key", "k"),
            ("libretranslate.timeout_secs", "5"),
            ("libretranslate.supported_languages", "en,de"),
            ("mymemory.endpoint", "https://mm.example"),
            ("mymemory.email", "me@example.com"),
            ("mymemory.timeout_secs", "5"),
            ("mymemory.supported_languages", "en"),
            ("analytics.enabled", "true"),
            ("analytics.tracking_id", "UA-1-1"),
            ("analytics.client_id", "abc"),
            ("analytics.endpoint", "https://collect.example"),
        ];
        assert_eq!(samples.len(), VALID_CONFIG_KEYS.len());

        let mut config = AppConfig::empty();
        for (key, value) in samples {
            set_value(&mut config, key, value).unwrap();
            assert!(display_value(&config, key).is_some(), "{key} not stored");
        }
    }
}
