// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::error::Result;
use crate::models::github::{
    LegacyRepoSearchResponse, LegacyUserSearchResponse, RepoRecord, UserRecord, UserRepo,
};
use crate::models::search::SearchResult;
use crate::services::fetcher::Fetcher;
use crate::services::formatter::{history_description, repo_description, user_description};
use crate::services::history::HistoryStore;
use crate::services::urls::UrlBuilder;
use std::sync::Arc;

/// The four ways of turning a classified query into suggestions.
///
/// Every lookup keeps the order it gets from upstream (or from history) and
/// stops at `max_results`.
pub struct Lookups {
    fetcher: Arc<Fetcher>,
    urls: UrlBuilder,
    history: Option<Arc<HistoryStore>>,
    max_results: usize,
}

impl Lookups {
    pub fn new(
        fetcher: Arc<Fetcher>,
        urls: UrlBuilder,
        history: Option<Arc<HistoryStore>>,
        max_results: usize,
    ) -> Self {
        Self {
            fetcher,
            urls,
            history,
            max_results,
        }
    }

    pub fn has_history(&self) -> bool {
        self.history.is_some()
    }

    pub async fn find_users(&self, term: &str) -> Result<Vec<SearchResult>> {
        let response: LegacyUserSearchResponse = self
            .fetcher
            .fetch_json(&self.urls.user_search_url(term))
            .await?;

        Ok(response
            .users
            .into_iter()
            .take(self.max_results)
            .map(UserRecord::from)
            .map(|user| {
                SearchResult::new(
                    self.urls.profile_url(&user.login),
                    user_description(&user.login, &user.display_name, term),
                )
            })
            .collect())
    }

    pub async fn find_repos(&self, term: &str) -> Result<Vec<SearchResult>> {
        let response: LegacyRepoSearchResponse = self
            .fetcher
            .fetch_json(&self.urls.repo_search_url(term))
            .await?;

        Ok(response
            .repositories
            .into_iter()
            .take(self.max_results)
            .map(RepoRecord::from)
            .map(|repo| {
                SearchResult::new(
                    self.urls.repo_url(&repo.owner, &repo.name),
                    repo_description(&repo.owner, &repo.name, &repo.description, term, true),
                )
            })
            .collect())
    }

    /// The user's repositories (most recently pushed first) whose name contains `term`.
    pub async fn find_repos_by_user(&self, user: &str, term: &str) -> Result<Vec<SearchResult>> {
        let listing: Vec<UserRepo> = self
            .fetcher
            .fetch_json(&self.urls.user_repos_url(user))
            .await?;

        let term_lower = term.to_lowercase();

        Ok(listing
            .into_iter()
            .map(RepoRecord::from)
            .filter(|repo| repo.name.to_lowercase().contains(&term_lower))
            .take(self.max_results)
            .map(|repo| {
                let url = repo
                    .html_url
                    .clone()
                    .unwrap_or_else(|| self.urls.repo_url(&repo.owner, &repo.name));
                SearchResult::new(
                    url,
                    repo_description(user, &repo.name, &repo.description, term, false),
                )
            })
            .collect())
    }

    /// Visited paths containing `term`, most recent first. Empty without history.
    pub fn find_history(&self, term: &str) -> Vec<SearchResult> {
        let Some(history) = &self.history else {
            return Vec::new();
        };

        history
            .find(term, self.max_results)
            .into_iter()
            .map(|path| {
                SearchResult::new(
                    self.urls.history_url(&path),
                    history_description(&path, term),
                )
            })
            .collect()
    }
}
