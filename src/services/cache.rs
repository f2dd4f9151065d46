// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::models::cache::CacheEntry;
use crate::services::clock::Clock;
use crate::services::kv::KeyValueStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// TTL cache over a [`KeyValueStore`].
///
/// Every entry shares one validity window. Expired or unreadable entries are
/// treated as absent and removed when they are seen. Storage failures never
/// surface to callers: a failed write is rolled back and the value simply
/// isn't cached.
pub struct CacheStore {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    ttl_ms: i64,
}

impl CacheStore {
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            store,
            clock,
            ttl_ms: i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "cache read failed");
                return None;
            }
        };

        match serde_json::from_str::<CacheEntry>(&raw) {
            Ok(entry) if entry.is_fresh(self.clock.now_millis(), self.ttl_ms) => Some(entry.value),
            Ok(_) => {
                debug!(key, "cache entry expired");
                self.remove(key);
                None
            }
            Err(e) => {
                warn!(key, error = %e, "cache entry is corrupt");
                self.remove(key);
                None
            }
        }
    }

    /// Store `value` with a fresh timestamp. Returns whether it was cached.
    pub fn set(&self, key: &str, value: &str) -> bool {
        let entry = CacheEntry {
            value: value.to_string(),
            stored_at: self.clock.now_millis(),
        };

        let result = serde_json::to_string(&entry)
            .map_err(|e| e.to_string())
            .and_then(|raw| self.store.set(key, &raw).map_err(|e| e.to_string()));

        match result {
            Ok(()) => true,
            Err(e) => {
                warn!(key, error = %e, "could not cache value, rolling back");
                self.remove(key);
                false
            }
        }
    }

    pub fn remove(&self, key: &str) {
        if let Err(e) = self.store.remove(key) {
            warn!(key, error = %e, "cache remove failed");
        }
    }

    /// Remove every expired entry. Returns how many were removed.
    ///
    /// Keys that do not hold a cache envelope (the history blob, for one) are
    /// left alone.
    pub fn sweep(&self) -> usize {
        let keys = match self.store.keys() {
            Ok(keys) => keys,
            Err(e) => {
                warn!(error = %e, "cache sweep could not list keys");
                return 0;
            }
        };

        let now = self.clock.now_millis();
        let mut removed = 0;

        for key in keys {
            let Ok(Some(raw)) = self.store.get(&key) else {
                continue;
            };
            let Ok(entry) = serde_json::from_str::<CacheEntry>(&raw) else {
                continue;
            };
            if !entry.is_fresh(now, self.ttl_ms) {
                self.remove(&key);
                removed += 1;
            }
        }

        if removed > 0 {
            info!(removed, "swept expired cache entries");
        }
        removed
    }

    /// Run [`sweep`](Self::sweep) every `interval` on the current tokio runtime.
    pub fn spawn_sweeper(self: Arc<Self>, interval: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick completes immediately; startup already swept.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                self.sweep();
            }
        })
    }
}
