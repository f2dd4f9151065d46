// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Logging setup and helpers for keeping log lines short.

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// Honors `RUST_LOG`; defaults to `gh_omnibox=info`. Logs go to stderr so the
/// CLI can print suggestions on stdout.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gh_omnibox=info"));

    // A second init (tests, embedding) is not an error worth failing over.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// First `max_chars` characters of a response body, for log lines.
/// Shows the original length when truncated: "<html>...(2048 bytes)"
pub fn body_preview(body: &str, max_chars: usize) -> String {
    match body.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...({} bytes)", &body[..idx], body.len()),
        None => body.to_string(),
    }
}
