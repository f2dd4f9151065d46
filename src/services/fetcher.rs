// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::config::GithubConfig;
use crate::error::{OmniboxError, Result};
use crate::services::cache::CacheStore;
use crate::services::logging::body_preview;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};

/// Cache-through JSON retrieval.
///
/// One GET per cache miss, never retried. Concurrent misses for the same URL
/// each go to the network; the requests are idempotent so the last response
/// simply wins in the cache.
pub struct Fetcher {
    client: reqwest::Client,
    cache: Arc<CacheStore>,
}

impl Fetcher {
    pub fn new(config: &GithubConfig, cache: Arc<CacheStore>) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()?;

        Ok(Self { client, cache })
    }

    pub fn cache(&self) -> &Arc<CacheStore> {
        &self.cache
    }

    /// Fetch `url` and decode it as `T`, serving from cache while fresh.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        if let Some(cached) = self.cache.get(url) {
            match serde_json::from_str::<T>(&cached) {
                Ok(value) => {
                    debug!(url, "cache hit");
                    return Ok(value);
                }
                Err(e) => {
                    warn!(url, error = %e, "cached body no longer decodes, refetching");
                    self.cache.remove(url);
                }
            }
        }

        let body = self.get(url).await?;

        let value = serde_json::from_str::<T>(&body).map_err(|source| {
            warn!(url, body = %body_preview(&body, 200), "invalid JSON");
            OmniboxError::Parse {
                url: url.to_string(),
                source,
            }
        })?;

        self.cache.set(url, &body);
        Ok(value)
    }

    async fn get(&self, url: &str) -> Result<String> {
        let request_error = |source: reqwest::Error| OmniboxError::Request {
            url: url.to_string(),
            source,
        };

        debug!(url, "fetching");
        let response = self.client.get(url).send().await.map_err(request_error)?;

        let status = response.status();
        if !(status.is_success() || status.as_u16() == 304) {
            warn!(url, status = status.as_u16(), "request failed");
            return Err(OmniboxError::Transport {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(request_error)
    }
}
