// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Runtime configuration, loaded from environment variables.
//!
//! Every value has a default so the binary runs with an empty environment.
//! The structs are handed to constructors; nothing here is global.

use crate::error::OmniboxError;
use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Application version extracted from `Cargo.toml` at compile time.
/// The patch segment can be overridden via `OMNIBOX_PATCH_VERSION` (see `build.rs`).
pub const VERSION: &str = env!("OMNIBOX_VERSION");

/// The omnibox never shows more suggestions than this.
pub const MAX_SUGGESTIONS: usize = 5;

/// Where GitHub lives and how we introduce ourselves to its API.
#[derive(Debug, Clone)]
pub struct GithubConfig {
    pub html_base: String,
    pub api_base: String,
    pub user_agent: String,
}

impl GithubConfig {
    /// Both bases must be absolute URLs; paths are appended to them verbatim.
    pub fn validate(&self) -> crate::error::Result<()> {
        for base in [&self.html_base, &self.api_base] {
            url::Url::parse(base).map_err(|source| OmniboxError::InvalidUrl {
                url: base.clone(),
                source,
            })?;
        }
        Ok(())
    }
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            html_base: "https://github.com".to_string(),
            api_base: "https://api.github.com".to_string(),
            user_agent: format!("gh-omnibox/{}", VERSION),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Single global validity window for every cached response.
    pub ttl: Duration,
    pub sweep_interval: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(24 * 60 * 60),
            sweep_interval: Duration::from_secs(60 * 60),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HistoryConfig {
    pub enabled: bool,
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            capacity: 100,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OmniboxConfig {
    pub github: GithubConfig,
    pub cache: CacheConfig,
    pub history: HistoryConfig,
    pub debounce: Duration,
    /// The omnibox shows at most this many suggestions.
    pub max_results: usize,
    /// `None` keeps everything in memory for the lifetime of the process.
    pub storage_path: Option<PathBuf>,
    pub listen_addr: SocketAddr,
}

impl Default for OmniboxConfig {
    fn default() -> Self {
        Self {
            github: GithubConfig::default(),
            cache: CacheConfig::default(),
            history: HistoryConfig::default(),
            debounce: Duration::from_millis(250),
            max_results: MAX_SUGGESTIONS,
            storage_path: None,
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

impl OmniboxConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let github = GithubConfig {
            html_base: env_or("GITHUB_HTML_BASE", defaults.github.html_base),
            api_base: env_or("GITHUB_API_BASE", defaults.github.api_base),
            user_agent: env_or("OMNIBOX_USER_AGENT", defaults.github.user_agent),
        };
        github.validate()?;

        let cache = CacheConfig {
            ttl: ttl_from_hours(
                parse_env("CACHE_TTL_HOURS", 24)
                    .context("CACHE_TTL_HOURS must be a valid number")?,
            )?,
            sweep_interval: Duration::from_secs(
                parse_env("CACHE_SWEEP_INTERVAL_SECS", 3600)
                    .context("CACHE_SWEEP_INTERVAL_SECS must be a valid number")?,
            ),
        };

        let history = HistoryConfig {
            enabled: env::var("HISTORY_ENABLED")
                .map(|v| v == "true")
                .unwrap_or(defaults.history.enabled),
            capacity: parse_env("HISTORY_CAPACITY", defaults.history.capacity)
                .context("HISTORY_CAPACITY must be a valid number")?,
        };

        Ok(Self {
            github,
            cache,
            history,
            debounce: Duration::from_millis(
                parse_env("DEBOUNCE_MS", 250).context("DEBOUNCE_MS must be a valid number")?,
            ),
            max_results: checked_max_results(
                parse_env("MAX_RESULTS", defaults.max_results)
                    .context("MAX_RESULTS must be a valid number")?,
            )?,
            storage_path: env::var("OMNIBOX_STORAGE_PATH")
                .ok()
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            listen_addr: parse_env("LISTEN_ADDR", defaults.listen_addr)
                .context("LISTEN_ADDR must be a socket address")?,
        })
    }
}

fn ttl_from_hours(hours: u64) -> Result<Duration> {
    hours
        .checked_mul(60 * 60)
        .map(Duration::from_secs)
        .with_context(|| format!("CACHE_TTL_HOURS={hours} is too large"))
}

fn checked_max_results(max_results: usize) -> Result<usize> {
    if (1..=MAX_SUGGESTIONS).contains(&max_results) {
        Ok(max_results)
    } else {
        anyhow::bail!("MAX_RESULTS must be between 1 and {MAX_SUGGESTIONS}, got {max_results}")
    }
}

fn env_or(name: &str, default: String) -> String {
    env::var(name)
        .ok()
        .map(|v| v.trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
}

fn parse_env<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => Ok(raw.trim().parse::<T>()?),
        Err(_) => Ok(default),
    }
}
