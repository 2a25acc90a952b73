//! Domain layer - Core business logic
//!
//! Contains value objects, the result organizer, configuration and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod translation;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use translation::{
    organize, LanguageCode, OrganizedOutcome, TranslateRequest, TranslateResult,
};
