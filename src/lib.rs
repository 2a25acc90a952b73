//! cliptrans - clipboard translation aggregator
//!
//! Every observed text is sent to all enabled translation providers at once.
//! The first successful translation is shown as a notification, provider
//! failures are collected into a second one, and results are cached per text
//! so repeated or concurrent requests reach each provider only once.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Language codes, requests, results, the organizer, config and errors
//! - **Application**: The translation pipeline, provider registry, result cache and port traits
//! - **Infrastructure**: Adapter implementations (whatlang, LibreTranslate, MyMemory, notifications, analytics, config file)
//! - **CLI**: Command-line interface, argument parsing, logging and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
