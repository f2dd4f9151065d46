// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use serde::{Deserialize, Serialize};

/// One omnibox suggestion line.
///
/// Serialized with the field names the browser omnibox API expects
/// (`content`, `description`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Where the browser goes when this suggestion is picked
    #[serde(rename = "content")]
    pub destination_url: String,
    /// `<url>`/`<dim>`/`<match>` markup shown in the dropdown
    #[serde(rename = "description")]
    pub description_markup: String,
}

impl SearchResult {
    pub fn new(destination_url: impl Into<String>, description_markup: impl Into<String>) -> Self {
        Self {
            destination_url: destination_url.into(),
            description_markup: description_markup.into(),
        }
    }
}

/// Query string of `GET /suggest`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestRequest {
    /// Raw omnibox text, as typed
    #[serde(default)]
    pub text: String,
}

/// Body of `GET /suggest` when the router emitted results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestResponse {
    pub results: Vec<SearchResult>,
}

/// Body of `POST /navigate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigateRequest {
    /// The accepted suggestion URL, or the raw text the user pressed enter on
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigateResponse {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepResponse {
    /// Number of expired cache entries removed
    pub removed: usize,
}
