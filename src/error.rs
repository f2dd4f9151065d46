// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use thiserror::Error;

/// Failures inside the suggestion pipeline.
///
/// None of these ever reach the end user as a suggestion entry; callers log
/// them and fall back to "no suggestions".
#[derive(Debug, Error)]
pub enum OmniboxError {
    /// The remote answered with a status outside 200..=299 that is not 304.
    #[error("unexpected HTTP status {status} for {url}")]
    Transport { url: String, status: u16 },

    /// The request never produced a readable response.
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The body (remote or cached) was not the JSON we expected.
    #[error("invalid JSON from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// A key-value backend refused a read or write.
    #[error("storage failure: {0}")]
    Storage(String),

    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, OmniboxError>;
