//! Provider registry

use std::sync::Arc;

use futures::future::join_all;

use crate::domain::translation::{TranslateRequest, TranslateResult};

use super::ports::TranslationProvider;

/// The fixed set of active translation providers, in registration order.
///
/// Assembled once at startup from configuration and never changed afterwards.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn TranslationProvider>>,
}

impl ProviderRegistry {
    /// Create a registry from an explicit provider list
    pub fn new(providers: Vec<Arc<dyn TranslationProvider>>) -> Self {
        Self { providers }
    }

    /// Active providers in registration order
    pub fn providers(&self) -> &[Arc<dyn TranslationProvider>] {
        &self.providers
    }

    /// Provider ids in registration order
    pub fn ids(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Query every provider concurrently and wait for all of them.
    ///
    /// Results come back in registration order regardless of which provider
    /// finished first.
    pub async fn fan_out(&self, request: &TranslateRequest) -> Vec<TranslateResult> {
        join_all(self.providers.iter().map(|p| p.fetch(request))).await
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.ids())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::translation::LanguageCode;
    use async_trait::async_trait;
    use std::time::Duration;

    struct DelayedProvider {
        id: &'static str,
        delay_ms: u64,
        reply: Option<&'static str>,
    }

    #[async_trait]
    impl TranslationProvider for DelayedProvider {
        fn id(&self) -> &str {
            self.id
        }

        async fn fetch(&self, _request: &TranslateRequest) -> TranslateResult {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
            match self.reply {
                Some(text) => TranslateResult::success(self.id, text),
                None => TranslateResult::failure(self.id, "unavailable"),
            }
        }
    }

    fn request() -> TranslateRequest {
        TranslateRequest::new(
            "hello",
            "en".parse::<LanguageCode>().unwrap(),
            "tr".parse::<LanguageCode>().unwrap(),
        )
    }

    #[tokio::test]
    async fn fan_out_keeps_registration_order() {
        let registry = ProviderRegistry::new(vec![
            Arc::new(DelayedProvider {
                id: "slow",
                delay_ms: 40,
                reply: Some("merhaba"),
            }),
            Arc::new(DelayedProvider {
                id: "fast",
                delay_ms: 0,
                reply: None,
            }),
        ]);

        let results = registry.fan_out(&request()).await;

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].provider_id(), "slow");
        assert_eq!(results[1].provider_id(), "fast");
        assert!(!results[1].succeeded());
    }

    #[tokio::test]
    async fn fan_out_runs_providers_concurrently() {
        let providers: Vec<Arc<dyn TranslationProvider>> = (0..4)
            .map(|_| {
                Arc::new(DelayedProvider {
                    id: "p",
                    delay_ms: 100,
                    reply: Some("x"),
                }) as Arc<dyn TranslationProvider>
            })
            .collect();
        let registry = ProviderRegistry::new(providers);

        let started = std::time::Instant::now();
        let results = registry.fan_out(&request()).await;

        assert_eq!(results.len(), 4);
        assert!(started.elapsed() < Duration::from_millis(350));
    }

    #[tokio::test]
    async fn empty_registry_yields_no_results() {
        let registry = ProviderRegistry::default();
        assert!(registry.is_empty());
        assert!(registry.fan_out(&request()).await.is_empty());
    }

    #[test]
    fn ids_are_listed_in_order() {
        let registry = ProviderRegistry::new(vec![
            Arc::new(DelayedProvider {
                id: "a",
                delay_ms: 0,
                reply: None,
            }),
            Arc::new(DelayedProvider {
                id: "b",
                delay_ms: 0,
                reply: None,
            }),
        ]);
        assert_eq!(registry.ids(), vec!["a", "b"]);
        assert_eq!(registry.len(), 2);
    }
}
