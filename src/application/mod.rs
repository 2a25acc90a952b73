//! Application layer - Use cases and port interfaces
//!
//! Contains the translation pipeline and the trait definitions
//! for external system interactions.

pub mod cache;
pub mod pipeline;
pub mod ports;
pub mod registry;

pub use cache::{CacheLookup, CacheStats, CachedResults, ResultCache};
pub use pipeline::{
    intake_channel, CycleOutcome, PipelineConfig, PipelineError, PipelineHandle, RepeatFilter,
    RunSummary, SubmitError, TranslationPipeline, ERROR_TITLE,
};
pub use registry::ProviderRegistry;
