//! Translation pipeline use case
//!
//! Turns each observed text into notifications: detect the source language,
//! resolve provider results through the single-flight cache, organize them,
//! notify, then trace. Observations arrive over a bounded channel and each
//! cycle runs on its own task so intake never waits for translation.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use thiserror::Error;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::{JoinError, JoinHandle, JoinSet};
use tracing::{debug, info, warn};

use crate::domain::translation::{organize, LanguageCode, OrganizedOutcome, TranslateRequest};

use super::cache::{CacheLookup, ResultCache};
use super::ports::{
    AnalyticsTracer, DetectionError, LanguageDetector, NotificationIcon, Notifier,
};
use super::registry::ProviderRegistry;

/// Title of the notification sent when a cycle fails outright
pub const ERROR_TITLE: &str = "Error";

const TRACE_ACTION: &str = "Translate";
const TRACE_SCREEN: &str = "notification";

/// Errors that abort a single cycle
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Language detection failed: {0}")]
    Detection(#[from] DetectionError),

    #[error("{0}")]
    Fault(String),
}

/// Errors from submitting an observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Intake queue is full, observation dropped")]
    QueueFull,

    #[error("Pipeline has stopped")]
    Closed,
}

/// Settings the pipeline needs from configuration
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Language every text is translated into
    pub target_language: LanguageCode,
    /// Application name reported to analytics
    pub app_name: String,
    /// Application version reported to analytics
    pub app_version: String,
    /// Anonymous analytics client id
    pub client_id: String,
}

/// Report for one completed cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleOutcome {
    /// Detected (or fixed) source language
    pub source_language: LanguageCode,
    /// Whether this cycle ran the provider fan-out
    pub lookup: CacheLookup,
    /// Organized provider results; each present field was notified
    pub outcome: OrganizedOutcome,
}

/// Totals for one run of the intake loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub received: usize,
    pub discarded: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl RunSummary {
    fn record(&mut self, finished: Result<bool, JoinError>) {
        match finished {
            Ok(true) => self.succeeded += 1,
            Ok(false) => self.failed += 1,
            Err(e) => {
                warn!(error = %e, "Pipeline cycle task did not complete");
                self.failed += 1;
            }
        }
    }
}

/// Drops an observation identical to the one right before it.
///
/// There is no time window: A, B, A passes all three.
#[derive(Debug, Default)]
pub struct RepeatFilter {
    previous: Option<String>,
}

impl RepeatFilter {
    /// Returns true if `text` should be processed
    pub fn admit(&mut self, text: &str) -> bool {
        if self.previous.as_deref() == Some(text) {
            return false;
        }
        self.previous = Some(text.to_string());
        true
    }
}

/// Sending side of the intake queue
#[derive(Debug, Clone)]
pub struct PipelineHandle {
    sender: mpsc::Sender<String>,
}

impl PipelineHandle {
    /// Queue an observation without waiting.
    pub fn submit(&self, text: impl Into<String>) -> Result<(), SubmitError> {
        self.sender.try_send(text.into()).map_err(|e| match e {
            TrySendError::Full(_) => SubmitError::QueueFull,
            TrySendError::Closed(_) => SubmitError::Closed,
        })
    }
}

/// Create a bounded intake queue
pub fn intake_channel(capacity: usize) -> (PipelineHandle, mpsc::Receiver<String>) {
    let (sender, receiver) = mpsc::channel(capacity.max(1));
    (PipelineHandle { sender }, receiver)
}

/// Translation pipeline
pub struct TranslationPipeline<D, N, A>
where
    D: LanguageDetector,
    N: Notifier,
    A: AnalyticsTracer,
{
    detector: D,
    registry: ProviderRegistry,
    cache: ResultCache,
    notifier: N,
    tracer: A,
    config: PipelineConfig,
}

impl<D, N, A> TranslationPipeline<D, N, A>
where
    D: LanguageDetector,
    N: Notifier,
    A: AnalyticsTracer,
{
    /// Create a new pipeline
    pub fn new(
        detector: D,
        registry: ProviderRegistry,
        cache: ResultCache,
        notifier: N,
        tracer: A,
        config: PipelineConfig,
    ) -> Self {
        Self {
            detector,
            registry,
            cache,
            notifier,
            tracer,
            config,
        }
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    /// Run detection, lookup, organize, notify and trace for one text.
    pub async fn process(&self, text: &str) -> Result<CycleOutcome, PipelineError> {
        let source_language = self.detector.detect(text).await?;
        debug!(source = %source_language, "Detected source language");

        let request = TranslateRequest::new(
            text,
            source_language.clone(),
            self.config.target_language.clone(),
        );

        let (results, lookup) = self
            .cache
            .get_or_fetch(text, || self.registry.fan_out(&request))
            .await;

        let outcome = organize(&results);

        if let Some(primary) = &outcome.primary {
            self.notify(text, primary, NotificationIcon::Translation)
                .await;
        }
        if let Some(failures) = &outcome.failures {
            self.notify(text, failures, NotificationIcon::Warning).await;
        }

        self.trace(text, &source_language).await;

        Ok(CycleOutcome {
            source_language,
            lookup,
            outcome,
        })
    }

    /// Process one text, turning any error or panic into a single error
    /// notification.
    pub async fn handle(&self, text: &str) -> Result<CycleOutcome, PipelineError> {
        let result = match AssertUnwindSafe(self.process(text)).catch_unwind().await {
            Ok(result) => result,
            Err(panic) => Err(PipelineError::Fault(panic_message(panic.as_ref()))),
        };

        if let Err(e) = &result {
            warn!(error = %e, "Translation cycle aborted");
            self.notify(ERROR_TITLE, &e.to_string(), NotificationIcon::Error)
                .await;
        }

        result
    }

    async fn notify(&self, title: &str, body: &str, icon: NotificationIcon) {
        if let Err(e) = self.notifier.notify(title, body, icon).await {
            warn!(error = %e, "Failed to show notification");
        }
    }

    /// Best-effort analytics; failures are only logged.
    async fn trace(&self, text: &str, source_language: &LanguageCode) {
        let label = format!(
            "{} | {} - {} | v{}",
            text, source_language, self.config.target_language, self.config.app_version
        );

        if let Err(e) = self
            .tracer
            .track_event(&self.config.app_name, TRACE_ACTION, &label, None)
            .await
        {
            debug!(error = %e, "Analytics event failed");
        }

        if let Err(e) = self
            .tracer
            .track_screen(
                &self.config.app_name,
                &self.config.app_version,
                &self.config.client_id,
                TRACE_SCREEN,
            )
            .await
        {
            debug!(error = %e, "Analytics screen view failed");
        }
    }
}

impl<D, N, A> TranslationPipeline<D, N, A>
where
    D: LanguageDetector + 'static,
    N: Notifier + 'static,
    A: AnalyticsTracer + 'static,
{
    /// Start the intake loop on a new task.
    ///
    /// The loop ends once every `PipelineHandle` is dropped and all queued
    /// cycles have finished.
    pub fn spawn(self: Arc<Self>, capacity: usize) -> (PipelineHandle, JoinHandle<RunSummary>) {
        let (handle, receiver) = intake_channel(capacity);
        let task = tokio::spawn(self.run(receiver));
        (handle, task)
    }

    /// Consume observations until the channel closes.
    ///
    /// Observations are dequeued one at a time; each admitted observation gets
    /// its own task, so cycles for different texts may finish out of order.
    pub async fn run(self: Arc<Self>, mut observations: mpsc::Receiver<String>) -> RunSummary {
        let mut filter = RepeatFilter::default();
        let mut cycles = JoinSet::new();
        let mut summary = RunSummary::default();

        while let Some(text) = observations.recv().await {
            summary.received += 1;

            if !filter.admit(&text) {
                debug!("Discarding repeated observation");
                summary.discarded += 1;
                continue;
            }

            while let Some(finished) = cycles.try_join_next() {
                summary.record(finished);
            }

            let pipeline = Arc::clone(&self);
            cycles.spawn(async move { pipeline.handle(&text).await.is_ok() });
        }

        while let Some(finished) = cycles.join_next().await {
            summary.record(finished);
        }

        info!(
            received = summary.received,
            discarded = summary.discarded,
            succeeded = summary.succeeded,
            failed = summary.failed,
            "Pipeline stopped"
        );
        summary
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unexpected internal error".to_string()
    }
}
