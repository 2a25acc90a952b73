//! Translation domain module

mod language;
mod organizer;
mod request;
mod result;

pub use language::LanguageCode;
pub use organizer::{organize, OrganizedOutcome};
pub use request::TranslateRequest;
pub use result::TranslateResult;
