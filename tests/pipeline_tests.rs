//! Pipeline tests wiring real adapters to mocked provider APIs

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use cliptrans::application::ports::{
    NotificationError, NotificationIcon, Notifier, TranslationProvider,
};
use cliptrans::application::{
    CacheLookup, PipelineConfig, ProviderRegistry, ResultCache, TranslationPipeline,
};
use cliptrans::domain::translation::LanguageCode;
use cliptrans::infrastructure::{
    FixedLanguageDetector, LibreTranslateProvider, MyMemoryProvider, NoopTracer,
};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Clone, Default)]
struct CollectingNotifier {
    sent: Arc<Mutex<Vec<(String, String, NotificationIcon)>>>,
}

#[async_trait]
impl Notifier for CollectingNotifier {
    async fn notify(
        &self,
        title: &str,
        message: &str,
        icon: NotificationIcon,
    ) -> Result<(), NotificationError> {
        self.sent
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string(), icon));
        Ok(())
    }
}

fn config() -> PipelineConfig {
    PipelineConfig {
        target_language: "tr".parse().unwrap(),
        app_name: "cliptrans".to_string(),
        app_version: "test".to_string(),
        client_id: "client".to_string(),
    }
}

fn pipeline(
    server: &MockServer,
    notifier: CollectingNotifier,
) -> TranslationPipeline<FixedLanguageDetector, CollectingNotifier, NoopTracer> {
    let providers: Vec<Arc<dyn TranslationProvider>> = vec![
        Arc::new(LibreTranslateProvider::new(
            server.uri(),
            None,
            Duration::from_secs(5),
        )),
        Arc::new(MyMemoryProvider::new(server.uri(), None, Duration::from_secs(5))),
    ];

    TranslationPipeline::new(
        FixedLanguageDetector::new("en".parse::<LanguageCode>().unwrap()),
        ProviderRegistry::new(providers),
        ResultCache::new(16),
        notifier,
        NoopTracer,
        config(),
    )
}

#[tokio::test]
async fn concurrent_cycles_hit_each_api_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "translatedText": "merhaba" }))
                .set_delay(Duration::from_millis(100)),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "responseData": { "translatedText": "selam" },
            "responseStatus": 200
        })))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = CollectingNotifier::default();
    let pipeline = Arc::new(pipeline(&server, notifier.clone()));

    let tasks: Vec<_> = (0..6)
        .map(|_| {
            let pipeline = Arc::clone(&pipeline);
            tokio::spawn(async move { pipeline.handle("hello").await })
        })
        .collect();

    let mut fetched = 0;
    for task in tasks {
        let cycle = task.await.unwrap().unwrap();
        // Registration order decides the primary, not response speed
        assert_eq!(cycle.outcome.primary.as_deref(), Some("merhaba"));
        assert!(cycle.outcome.failures.is_none());
        if cycle.lookup == CacheLookup::Fetched {
            fetched += 1;
        }
    }

    assert_eq!(fetched, 1);
    assert_eq!(pipeline.cache().stats().misses, 1);
    assert_eq!(notifier.sent.lock().unwrap().len(), 6);
}

#[tokio::test]
async fn provider_outage_is_reported_beside_translation() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "responseData": { "translatedText": "selam" },
            "responseStatus": 200
        })))
        .mount(&server)
        .await;

    let notifier = CollectingNotifier::default();
    let pipeline = pipeline(&server, notifier.clone());

    pipeline.handle("hello").await.unwrap();

    let sent = notifier.sent.lock().unwrap().clone();
    assert_eq!(
        sent,
        vec![
            (
                "hello".to_string(),
                "selam".to_string(),
                NotificationIcon::Translation
            ),
            (
                "hello".to_string(),
                "libretranslate: API error: HTTP 502: bad gateway".to_string(),
                NotificationIcon::Warning
            ),
        ]
    );
}

#[tokio::test]
async fn spawned_pipeline_drains_queue_on_close() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/translate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "translatedText": "x" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/get"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "responseData": { "translatedText": "y" },
            "responseStatus": 200
        })))
        .mount(&server)
        .await;

    let notifier = CollectingNotifier::default();
    let pipeline = Arc::new(pipeline(&server, notifier.clone()));
    let (handle, task) = pipeline.spawn(8);

    for text in ["one", "two", "two", "three"] {
        handle.submit(text).unwrap();
    }
    drop(handle);

    let summary = task.await.unwrap();
    assert_eq!(summary.received, 4);
    assert_eq!(summary.discarded, 1);
    assert_eq!(summary.succeeded, 3);

    let mut titles: Vec<String> = notifier
        .sent
        .lock()
        .unwrap()
        .iter()
        .map(|(title, _, _)| title.clone())
        .collect();
    titles.sort();
    assert_eq!(titles, vec!["one", "three", "two"]);
}
