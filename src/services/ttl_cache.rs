use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use tokio::sync::Mutex as AsyncMutex;

struct CacheEntry<V> {
    stored_at: Instant,
    value: V,
}

/// Bounded cache-aside store with per-call freshness windows.
///
/// A fresh entry is returned without invoking the fetch function; a miss or
/// expired entry triggers one fetch, stored on success. Fetches for the same
/// key are coalesced: concurrent requesters of a cold key wait on a per-key
/// gate and re-read the refreshed entry instead of fetching again. When the
/// capacity is reached, inserting a new key evicts the oldest-stored entry.
///
/// The backing map is only locked across lookups and inserts, never across
/// an await.
pub struct TtlCache<V> {
    capacity: usize,
    entries: Mutex<HashMap<String, CacheEntry<V>>>,
    inflight: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(capacity: usize) -> Self {
        TtlCache {
            capacity,
            entries: Mutex::new(HashMap::new()),
            inflight: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached value for `key` if it is younger than `ttl`,
    /// otherwise runs `fetch` and caches its result.
    pub async fn get_or_fetch<F, Fut, E>(&self, key: &str, ttl: Duration, fetch: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.lookup(key, ttl) {
            return Ok(value);
        }

        let gate = self.gate(key);
        let guard = gate.lock().await;

        // Another task may have refreshed the entry while we waited.
        if let Some(value) = self.lookup(key, ttl) {
            drop(guard);
            self.release_gate(key);
            return Ok(value);
        }

        let result = fetch().await;
        if let Ok(value) = &result {
            self.store(key, value.clone());
        }

        drop(guard);
        self.release_gate(key);
        result
    }

    pub fn size(&self) -> usize {
        self.lock_entries().len()
    }

    pub fn clear(&self) {
        self.lock_entries().clear();
        self.inflight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn lookup(&self, key: &str, ttl: Duration) -> Option<V> {
        let entries = self.lock_entries();
        entries
            .get(key)
            .filter(|entry| entry.stored_at.elapsed() < ttl)
            .map(|entry| entry.value.clone())
    }

    fn store(&self, key: &str, value: V) {
        let mut entries = self.lock_entries();
        if !entries.contains_key(key) && entries.len() >= self.capacity {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.stored_at)
                .map(|(k, _)| k.clone());
            if let Some(oldest) = oldest {
                entries.remove(&oldest);
            }
        }
        entries.insert(
            key.to_string(),
            CacheEntry {
                stored_at: Instant::now(),
                value,
            },
        );
    }

    fn gate(&self, key: &str) -> Arc<AsyncMutex<()>> {
        let mut inflight = self
            .inflight
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        inflight
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(AsyncMutex::new(())))
            .clone()
    }

    fn release_gate(&self, key: &str) {
        self.inflight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }

    fn lock_entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, CacheEntry<V>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
