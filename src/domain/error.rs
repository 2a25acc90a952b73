//! Domain error types

use thiserror::Error;

/// Error when parsing a language code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid language code: \"{input}\". Expected an ISO 639 code such as en, tr or zh-CN")]
pub struct InvalidLanguageError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),

    #[error("No translation providers enabled. Set them via 'cliptrans config set providers libretranslate,mymemory'")]
    NoProviders,
}
