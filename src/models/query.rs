// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

/// What the user is asking for, derived from raw omnibox text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// `@name`
    UserSearch(String),
    /// `term`
    RepoSearch(String),
    /// `user/term`
    RepoByUser { user: String, term: String },
    /// `:term`, only when history is enabled
    HistorySearch(String),
    /// Empty input, a bare `@`, or a leading `/`.
    Ignored,
}

impl Query {
    /// Classify omnibox input. Pure and total: every string maps to a variant.
    ///
    /// Rules are applied in order, first match wins. `history_enabled`
    /// controls whether a leading `:` is a history search or just part of a
    /// repository term.
    pub fn classify(input: &str, history_enabled: bool) -> Self {
        let query = input.trim().to_lowercase();

        if query.is_empty() || query == "@" || query.starts_with('/') {
            return Query::Ignored;
        }

        if let Some(name) = query.strip_prefix('@') {
            return Query::UserSearch(name.trim().to_string());
        }

        if history_enabled {
            if let Some(term) = query.strip_prefix(':') {
                return Query::HistorySearch(term.trim().to_string());
            }
        }

        match query.split_once('/') {
            None => Query::RepoSearch(query),
            Some((user, term)) => Query::RepoByUser {
                user: user.trim().to_string(),
                term: term.trim().to_string(),
            },
        }
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, Query::Ignored)
    }
}
