use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::RwLock;
use tracing::debug;

use crate::processing::summary::{SummaryOutput, SummaryRequest};

/// Configuration for the request memoisation cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Whether caching is active. A disabled cache is a no-op, which lets
    /// tests exercise the uncached path without rewiring the summarizer.
    pub enabled: bool,

    /// Maximum number of retained entries. Oldest entries are evicted
    /// first once the capacity is reached.
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { enabled: true, max_entries: 256 }
    }
}

/// Hit/miss/eviction counters, inspectable by tests.
#[derive(Debug, Default)]
pub struct CacheMetrics {
    /// Number of cache hits.
    pub hits: AtomicUsize,
    /// Number of cache misses.
    pub misses: AtomicUsize,
    /// Number of evicted entries.
    pub evictions: AtomicUsize,
}

struct Inner {
    entries: HashMap<String, SummaryOutput>,
    order: VecDeque<String>,
}

/// In-memory memoisation of completed summary requests.
///
/// Keyed by the full request tuple (text, persona, language, max_tokens,
/// temperature), so an identical request never re-triggers network calls
/// while its prior result is still held. Safe for concurrent readers.
pub struct MemoCache {
    inner: RwLock<Inner>,
    config: CacheConfig,
    metrics: CacheMetrics,
}

impl Default for MemoCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

impl MemoCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: CacheConfig) -> Self {
        Self {
            inner: RwLock::new(Inner { entries: HashMap::new(), order: VecDeque::new() }),
            config,
            metrics: CacheMetrics::default(),
        }
    }

    /// Cache key covering every request field. Temperature is keyed by
    /// its bit pattern so distinct float values never collide.
    pub fn key(request: &SummaryRequest) -> String {
        format!(
            "{}:{}:{}:{}:{}",
            request.persona.name(),
            request.language.code(),
            request.max_tokens,
            request.temperature.to_bits(),
            request.text,
        )
    }

    /// Look up a prior result for an identical request.
    pub async fn get(&self, request: &SummaryRequest) -> Option<SummaryOutput> {
        if !self.config.enabled {
            return None;
        }
        let key = Self::key(request);
        let inner = self.inner.read().await;
        match inner.entries.get(&key) {
            Some(output) => {
                self.metrics.hits.fetch_add(1, Ordering::Relaxed);
                Some(output.clone())
            }
            None => {
                self.metrics.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Store a completed result, evicting the oldest entry at capacity.
    pub async fn put(&self, request: &SummaryRequest, output: SummaryOutput) {
        if !self.config.enabled || self.config.max_entries == 0 {
            return;
        }
        let key = Self::key(request);
        let mut inner = self.inner.write().await;
        if !inner.entries.contains_key(&key) {
            while inner.order.len() >= self.config.max_entries {
                if let Some(oldest) = inner.order.pop_front() {
                    inner.entries.remove(&oldest);
                    self.metrics.evictions.fetch_add(1, Ordering::Relaxed);
                    debug!("evicted oldest cache entry");
                }
            }
            inner.order.push_back(key.clone());
        }
        inner.entries.insert(key, output);
    }

    /// Drop all entries.
    pub async fn clear(&self) {
        let mut inner = self.inner.write().await;
        inner.entries.clear();
        inner.order.clear();
    }

    /// Cache counters.
    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }
}
