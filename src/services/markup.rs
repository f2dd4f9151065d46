// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Formatting primitives for omnibox description markup.
//!
//! The browser renders descriptions as a tiny XML dialect with three tags:
//! `<url>`, `<dim>` and `<match>`. Everything user-supplied has to be escaped
//! before it is wrapped.

use regex::Regex;
use std::fmt::Display;

/// Escape order matters: `&` goes first so later entities are not re-escaped.
const SANITIZATION_RULES: [(char, &str); 4] = [
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
];

const ENTITIES: [&str; 4] = ["&amp;", "&lt;", "&gt;", "&quot;"];

/// Wrap content in a tag: `tag("dim", "x")` gives `<dim>x</dim>`.
pub fn tag(name: &str, content: &str) -> String {
    format!("<{name}>{content}</{name}>")
}

/// Stringify any displayable value and escape the XML-significant characters.
pub fn sanitize(value: impl Display) -> String {
    let mut text = value.to_string();
    for (raw, escaped) in SANITIZATION_RULES {
        if text.contains(raw) {
            text = text.replace(raw, escaped);
        }
    }
    text
}

/// Wrap every case-insensitive occurrence of `query` in `<match>` tags.
///
/// `query` is taken literally. Both arguments are expected to be sanitized
/// already; a match that would cut through an entity such as `&amp;` is
/// skipped so the markup stays well formed.
pub fn highlight(text: &str, query: &str) -> String {
    if query.is_empty() {
        return text.to_string();
    }

    let pattern = match Regex::new(&format!("(?i){}", regex::escape(query))) {
        Ok(pattern) => pattern,
        Err(_) => return text.to_string(),
    };

    let entities = entity_spans(text);
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut pos = 0;

    while pos <= text.len() {
        let Some(found) = pattern.find_at(text, pos) else {
            break;
        };

        if cuts_entity(&entities, found.start(), found.end()) {
            pos = found.start() + text[found.start()..].chars().next().map_or(1, char::len_utf8);
            continue;
        }

        out.push_str(&text[copied..found.start()]);
        out.push_str(&tag("match", found.as_str()));
        copied = found.end();
        pos = found.end().max(found.start() + 1);
    }

    out.push_str(&text[copied..]);
    out
}

/// Truncate to at most `max` characters (not bytes).
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn entity_spans(text: &str) -> Vec<(usize, usize)> {
    text.match_indices('&')
        .filter_map(|(start, _)| {
            ENTITIES
                .iter()
                .find(|entity| text[start..].starts_with(*entity))
                .map(|entity| (start, start + entity.len()))
        })
        .collect()
}

fn cuts_entity(entities: &[(usize, usize)], start: usize, end: usize) -> bool {
    entities
        .iter()
        .any(|&(lo, hi)| (lo < start && start < hi) || (lo < end && end < hi))
}
