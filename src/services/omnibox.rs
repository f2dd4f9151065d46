// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! The application root: owns the stores and wires them into the router.
//!
//! A host (the HTTP API, the interactive CLI) talks to the core only through
//! [`Omnibox::on_input_changed`] and [`Omnibox::on_input_entered`].

use crate::config::{OmniboxConfig, MAX_SUGGESTIONS};
use crate::models::search::SearchResult;
use crate::services::cache::CacheStore;
use crate::services::clock::{Clock, SystemClock};
use crate::services::debounce::Debouncer;
use crate::services::fetcher::Fetcher;
use crate::services::history::HistoryStore;
use crate::services::kv::{FileStore, KeyValueStore, MemoryStore};
use crate::services::lookup::Lookups;
use crate::services::router::QueryRouter;
use crate::services::urls::UrlBuilder;
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};

pub struct Omnibox {
    router: Arc<QueryRouter>,
    cache: Arc<CacheStore>,
    history: Option<Arc<HistoryStore>>,
    urls: UrlBuilder,
    debouncer: Debouncer,
    sweep_interval: Duration,
}

impl Omnibox {
    /// Build everything on top of the given store and clock.
    pub fn new(
        config: &OmniboxConfig,
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let urls = UrlBuilder::new(&config.github);
        let cache = Arc::new(CacheStore::new(store.clone(), clock, config.cache.ttl));
        let fetcher = Arc::new(Fetcher::new(&config.github, cache.clone())?);

        let history = config
            .history
            .enabled
            .then(|| Arc::new(HistoryStore::load(store, config.history.capacity)));

        let max_results = config.max_results.min(MAX_SUGGESTIONS);
        let lookups = Lookups::new(fetcher, urls.clone(), history.clone(), max_results);

        Ok(Self {
            router: Arc::new(QueryRouter::new(lookups, max_results)),
            cache,
            history,
            urls,
            debouncer: Debouncer::new(config.debounce),
            sweep_interval: config.cache.sweep_interval,
        })
    }

    /// Build with the system clock, persisting to `storage_path` when configured.
    pub fn from_config(config: &OmniboxConfig) -> Result<Self> {
        let store: Arc<dyn KeyValueStore> = match &config.storage_path {
            Some(path) => {
                info!(path = %path.display(), "using file storage");
                Arc::new(FileStore::open(path)?)
            }
            None => Arc::new(MemoryStore::new()),
        };

        Self::new(config, store, Arc::new(SystemClock))
    }

    pub fn cache(&self) -> &Arc<CacheStore> {
        &self.cache
    }

    pub fn history(&self) -> Option<&Arc<HistoryStore>> {
        self.history.as_ref()
    }

    /// Keystroke entry point: debounced, `emit` runs at most once and only for
    /// the last input of a burst.
    pub fn on_input_changed<F>(&self, text: &str, emit: F)
    where
        F: FnOnce(Vec<SearchResult>) + Send + 'static,
    {
        let router = self.router.clone();
        let text = text.to_string();

        self.debouncer.schedule(async move {
            router.classify_and_dispatch(&text, emit).await;
        });
    }

    /// Undebounced single pass, for hosts that debounce on their side.
    pub async fn suggest(&self, text: &str) -> Option<Vec<SearchResult>> {
        self.router.route(text).await
    }

    /// Accept a suggestion or raw text. Returns the URL to open.
    ///
    /// Destinations on the GitHub HTML host other than the search page are
    /// remembered in history.
    pub fn on_input_entered(&self, text: &str) -> String {
        let destination = self.resolve_destination(text);

        if let (Some(history), Some(path)) = (&self.history, self.urls.history_path(&destination))
        {
            debug!(%path, "recording visit");
            history.push(&path);
        }

        destination
    }

    /// A literal http(s) URL is used as is; anything else becomes a GitHub search.
    pub fn resolve_destination(&self, text: &str) -> String {
        if is_url(text) {
            text.to_string()
        } else {
            self.urls.search_url(text)
        }
    }

    /// Sweep once now and keep sweeping on the configured interval.
    pub fn start_maintenance(&self) -> JoinHandle<()> {
        self.cache.sweep();
        self.cache.clone().spawn_sweeper(self.sweep_interval)
    }
}

fn is_url(text: &str) -> bool {
    text.starts_with("http://") || text.starts_with("https://")
}
