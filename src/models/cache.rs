// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use serde::{Deserialize, Serialize};

/// Envelope stored under each cache key (the full request URL).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Raw response body as received from the remote
    pub value: String,
    /// Milliseconds since the Unix epoch at the time of the last fetch
    pub stored_at: i64,
}

impl CacheEntry {
    /// An entry is valid iff `0 <= now - stored_at < ttl_ms`.
    ///
    /// A timestamp too far from `now` to subtract, or one in the future, is stale.
    pub fn is_fresh(&self, now_ms: i64, ttl_ms: i64) -> bool {
        match now_ms.checked_sub(self.stored_at) {
            Some(age) => (0..ttl_ms).contains(&age),
            None => false,
        }
    }
}
