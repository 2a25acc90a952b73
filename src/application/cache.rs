//! Single-flight result cache
//!
//! Memoizes fan-out results per raw input text. Concurrent callers asking for
//! the same text share one in-flight computation and its eventual value.

use std::future::Future;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use lru::LruCache;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::domain::translation::TranslateResult;

/// Shared, immutable result set for one input text
pub type CachedResults = Arc<[TranslateResult]>;

type Slot = Arc<OnceCell<CachedResults>>;

/// How a lookup was satisfied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheLookup {
    /// This caller ran the fetch
    Fetched,
    /// The value came from an earlier or concurrent fetch
    Shared,
}

/// Cache hit/miss counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Result cache keyed on exact input text.
///
/// The map lock is only held to find or create a slot, never across an await.
/// Eviction only considers settled slots, so a text whose fetch is still
/// running keeps its slot and the cache may briefly hold more than
/// `capacity` entries.
pub struct ResultCache {
    slots: Mutex<LruCache<String, Slot>>,
    capacity: Option<NonZeroUsize>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ResultCache {
    /// Create a cache holding at most `capacity` texts; 0 means unbounded
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Mutex::new(LruCache::unbounded()),
            capacity: NonZeroUsize::new(capacity),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Return the results for `key`, running `fetch` only if no other caller
    /// has already produced or is producing them.
    pub async fn get_or_fetch<F, Fut>(&self, key: &str, fetch: F) -> (CachedResults, CacheLookup)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Vec<TranslateResult>>,
    {
        let slot = self.slot(key);
        let mut ran = false;

        let results = slot
            .get_or_init(|| async {
                ran = true;
                CachedResults::from(fetch().await)
            })
            .await
            .clone();

        // Settling may have freed a slot that an earlier insert could not evict
        self.evict_settled(&mut self.lock());

        if ran {
            self.misses.fetch_add(1, Ordering::Relaxed);
            debug!(key_len = key.len(), "Result cache miss, fetched");
            (results, CacheLookup::Fetched)
        } else {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!(key_len = key.len(), "Result cache hit");
            (results, CacheLookup::Shared)
        }
    }

    /// Current counters
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }

    /// Number of cached (or in-flight) texts
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find the slot for `key`, creating an empty one on first sight
    fn slot(&self, key: &str) -> Slot {
        let mut slots = self.lock();
        if let Some(slot) = slots.get(key) {
            return Arc::clone(slot);
        }
        let slot = Slot::default();
        slots.put(key.to_string(), Arc::clone(&slot));
        self.evict_settled(&mut slots);
        slot
    }

    /// Drop least recently used settled slots until back within capacity
    fn evict_settled(&self, slots: &mut LruCache<String, Slot>) {
        let Some(capacity) = self.capacity else {
            return;
        };

        while slots.len() > capacity.get() {
            let victim = slots
                .iter()
                .rev()
                .find(|(_, slot)| slot.initialized())
                .map(|(key, _)| key.clone());

            match victim {
                Some(key) => {
                    slots.pop(&key);
                }
                None => {
                    debug!(in_flight = slots.len(), "Result cache over capacity while fetches run");
                    break;
                }
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LruCache<String, Slot>> {
        // The guarded section cannot panic halfway through a mutation
        self.slots.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new(crate::domain::config::DEFAULT_CACHE_CAPACITY)
    }
}
