//! App runners for watch and one-shot translate modes

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};

use crate::application::ports::{AnalyticsTracer, ConfigStore, LanguageDetector, Notifier};
use crate::application::{
    PipelineConfig, ProviderRegistry, ResultCache, SubmitError, TranslationPipeline,
};
use crate::domain::config::{AppConfig, LibreTranslateConfig, AUTO_DETECT};
use crate::domain::error::{ConfigError, InvalidLanguageError};
use crate::domain::translation::LanguageCode;
use crate::infrastructure::notification::APP_NAME;
use crate::infrastructure::{
    create_detector, create_notifier, create_providers, create_tracer, NotifierKind,
    XdgConfigStore,
};

use super::args::Cli;
use super::presenter::Presenter;
use super::signals::ShutdownSignal;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable overriding `target_language`
pub const TARGET_LANGUAGE_ENV: &str = "CLIPTRANS_TARGET_LANGUAGE";
/// Environment variable overriding `libretranslate.api_key`
pub const LIBRETRANSLATE_API_KEY_ENV: &str = "LIBRETRANSLATE_API_KEY";

/// Pipeline wired with runtime-selected adapters
pub type AppPipeline =
    TranslationPipeline<Box<dyn LanguageDetector>, Box<dyn Notifier>, Box<dyn AnalyticsTracer>>;

/// Build the config layer from command-line flags.
///
/// Language flags are validated here so a typo is a usage error rather
/// than a silent fallback to the default.
pub fn cli_overrides(cli: &Cli) -> Result<AppConfig, InvalidLanguageError> {
    let target_language = cli
        .to
        .as_deref()
        .map(|s| s.parse::<LanguageCode>().map(|c| c.to_string()))
        .transpose()?;

    let source_language = match cli.from.as_deref() {
        Some(s) if s.trim().eq_ignore_ascii_case(AUTO_DETECT) => Some(AUTO_DETECT.to_string()),
        Some(s) => Some(s.parse::<LanguageCode>()?.to_string()),
        None => None,
    };

    let notify = if cli.notify {
        Some(true)
    } else if cli.console {
        Some(false)
    } else {
        None
    };

    Ok(AppConfig {
        target_language,
        source_language,
        providers: cli.providers.clone(),
        notify,
        ..Default::default()
    })
}

/// Build the config layer from environment variables
pub fn env_overrides() -> AppConfig {
    let non_empty = |name: &str| env::var(name).ok().filter(|s| !s.trim().is_empty());

    AppConfig {
        target_language: non_empty(TARGET_LANGUAGE_ENV),
        libretranslate: non_empty(LIBRETRANSLATE_API_KEY_ENV).map(|key| LibreTranslateConfig {
            api_key: Some(key),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|e| {
        warn!(error = %e, path = %store.path().display(), "Ignoring unreadable config file");
        AppConfig::empty()
    });

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_overrides())
        .merge(cli_config)
}

/// Where a watch session should deliver notifications
pub fn watch_notifier_kind(config: &AppConfig) -> NotifierKind {
    if config.notify_or_default() {
        NotifierKind::Desktop
    } else {
        NotifierKind::Console
    }
}

/// Where a one-shot translation should deliver notifications
pub fn translate_notifier_kind(cli_notify: bool) -> NotifierKind {
    if cli_notify {
        NotifierKind::Desktop
    } else {
        NotifierKind::Console
    }
}

/// Pipeline settings derived from the merged config
pub fn pipeline_config(config: &AppConfig) -> PipelineConfig {
    PipelineConfig {
        target_language: config.target_language_or_default(),
        app_name: APP_NAME.to_string(),
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        client_id: config
            .analytics
            .as_ref()
            .and_then(|a| a.client_id.clone())
            .unwrap_or_default(),
    }
}

/// Assemble the pipeline from configuration
pub fn build_pipeline(
    config: &AppConfig,
    notifier: NotifierKind,
) -> Result<AppPipeline, ConfigError> {
    let registry = ProviderRegistry::new(create_providers(config)?);
    debug!(providers = ?registry.ids(), "Provider registry assembled");

    Ok(TranslationPipeline::new(
        create_detector(config),
        registry,
        ResultCache::new(config.cache_capacity_or_default()),
        create_notifier(notifier),
        create_tracer(config),
        pipeline_config(config),
    ))
}

/// Translate every stdin line until EOF or shutdown
pub async fn run_watch(config: AppConfig, notifier: NotifierKind) -> ExitCode {
    let presenter = Presenter::new();

    let pipeline = match build_pipeline(&config, notifier) {
        Ok(pipeline) => Arc::new(pipeline),
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Setup signal handler
    let shutdown = ShutdownSignal::new();
    if let Err(e) = shutdown.setup().await {
        presenter.error(&format!("Failed to setup signal handler: {}", e));
        return ExitCode::from(EXIT_ERROR);
    }

    let (handle, task) = pipeline.spawn(config.queue_capacity_or_default());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut exit = EXIT_SUCCESS;

    presenter.info(&format!(
        "Watching stdin, translating to {} (Ctrl+C to stop)",
        config.target_language_or_default()
    ));

    loop {
        let line = tokio::select! {
            _ = shutdown.wait() => break,
            line = lines.next_line() => line,
        };

        let text = match line {
            Ok(Some(text)) => text,
            Ok(None) => break,
            Err(e) => {
                presenter.error(&format!("Failed to read stdin: {}", e));
                exit = EXIT_ERROR;
                break;
            }
        };

        let text = text.trim_end_matches('\r');
        if text.trim().is_empty() {
            continue;
        }

        match handle.submit(text) {
            Ok(()) => {}
            Err(SubmitError::QueueFull) => {
                warn!("Translation queue is full, dropping observation");
            }
            Err(SubmitError::Closed) => {
                presenter.error("Translation pipeline stopped unexpectedly");
                exit = EXIT_ERROR;
                break;
            }
        }
    }

    // Closing the queue lets in-flight cycles finish
    drop(handle);
    match task.await {
        Ok(summary) => presenter.watch_summary(&summary),
        Err(e) => {
            presenter.error(&format!("Translation pipeline failed: {}", e));
            exit = EXIT_ERROR;
        }
    }

    ExitCode::from(exit)
}

/// Run one pipeline cycle for `text`
pub async fn run_translate(config: AppConfig, notifier: NotifierKind, text: &str) -> ExitCode {
    let mut presenter = Presenter::new();

    if text.trim().is_empty() {
        presenter.error("Nothing to translate");
        return ExitCode::from(EXIT_USAGE_ERROR);
    }

    let pipeline = match build_pipeline(&config, notifier) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    // Console notifications print to stdout, which a spinner would garble
    let show_spinner = notifier != NotifierKind::Console;
    if show_spinner {
        presenter.start_spinner("Translating...");
    }

    let result = pipeline.handle(text).await;

    match result {
        Ok(cycle) if cycle.outcome.primary.is_some() => {
            if show_spinner {
                presenter.spinner_success(&format!("Translated from {}", cycle.source_language));
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(_) => {
            if show_spinner {
                presenter.spinner_fail("No provider returned a translation");
            }
            ExitCode::from(EXIT_ERROR)
        }
        Err(_) => {
            presenter.stop_spinner();
            ExitCode::from(EXIT_ERROR)
        }
    }
}
