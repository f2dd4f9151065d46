// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::services::kv::KeyValueStore;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Storage key of the serialized history list.
pub const HISTORY_KEY: &str = "history.history";

/// Recently visited GitHub paths, oldest first, without duplicates.
///
/// The whole list is written back to the store on every push.
pub struct HistoryStore {
    store: Arc<dyn KeyValueStore>,
    capacity: usize,
    entries: Mutex<VecDeque<String>>,
}

impl HistoryStore {
    /// Load the persisted history. A missing or corrupt blob yields an empty list.
    pub fn load(store: Arc<dyn KeyValueStore>, capacity: usize) -> Self {
        let mut entries = match store.get(HISTORY_KEY) {
            Ok(Some(raw)) => serde_json::from_str::<VecDeque<String>>(&raw).unwrap_or_else(|e| {
                warn!(error = %e, "history is corrupt, starting empty");
                VecDeque::new()
            }),
            Ok(None) => VecDeque::new(),
            Err(e) => {
                warn!(error = %e, "could not read history, starting empty");
                VecDeque::new()
            }
        };

        while entries.len() > capacity {
            entries.pop_front();
        }

        Self {
            store,
            capacity,
            entries: Mutex::new(entries),
        }
    }

    /// Move `path` to the most-recent end, evicting the oldest entries past capacity.
    pub fn push(&self, path: &str) {
        let Ok(mut entries) = self.entries.lock() else {
            warn!("history lock poisoned, dropping push");
            return;
        };

        if let Some(idx) = entries.iter().position(|p| p == path) {
            entries.remove(idx);
        }
        entries.push_back(path.to_string());
        while entries.len() > self.capacity {
            entries.pop_front();
        }

        self.save(&entries);
    }

    /// Case-insensitive substring search, most recent first, at most `limit` hits.
    pub fn find(&self, term: &str, limit: usize) -> Vec<String> {
        let term = term.to_lowercase();
        let Ok(entries) = self.entries.lock() else {
            return Vec::new();
        };

        entries
            .iter()
            .rev()
            .filter(|p| p.to_lowercase().contains(&term))
            .take(limit)
            .cloned()
            .collect()
    }

    /// Snapshot of all entries, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|e| e.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn save(&self, entries: &VecDeque<String>) {
        let result = serde_json::to_string(entries)
            .map_err(|e| e.to_string())
            .and_then(|raw| self.store.set(HISTORY_KEY, &raw).map_err(|e| e.to_string()));

        if let Err(e) = result {
            warn!(error = %e, len = entries.len(), "could not save history");
        }
    }
}
