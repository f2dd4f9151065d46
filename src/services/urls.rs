// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! URL templates for the two GitHub hosts.

use crate::config::GithubConfig;

/// A path template with `:name` placeholders, resolved against one of the hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// `/:user` on the HTML host
    HtmlUser,
    /// `/:user/:repo` on the HTML host
    HtmlRepo,
    /// `/search?q=:query` on the HTML host
    HtmlSearch,
    /// `/users/:user/repos?sort=pushed` on the API host
    ApiUserRepos,
    /// `/legacy/user/search/:query` on the API host
    ApiUserSearch,
    /// `/legacy/repos/search/:query` on the API host
    ApiRepoSearch,
}

impl Location {
    fn template(&self) -> &'static str {
        match self {
            Location::HtmlUser => "/:user",
            Location::HtmlRepo => "/:user/:repo",
            Location::HtmlSearch => "/search?q=:query",
            Location::ApiUserRepos => "/users/:user/repos?sort=pushed",
            Location::ApiUserSearch => "/legacy/user/search/:query",
            Location::ApiRepoSearch => "/legacy/repos/search/:query",
        }
    }

    fn is_api(&self) -> bool {
        matches!(
            self,
            Location::ApiUserRepos | Location::ApiUserSearch | Location::ApiRepoSearch
        )
    }
}

/// Resolves [`Location`] templates into absolute URLs.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    html_base: String,
    api_base: String,
}

impl UrlBuilder {
    pub fn new(config: &GithubConfig) -> Self {
        Self {
            html_base: config.html_base.trim_end_matches('/').to_string(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn html_base(&self) -> &str {
        &self.html_base
    }

    /// Substitute each `:name` with the percent-encoded value and prefix the host.
    pub fn url_for(&self, location: Location, params: &[(&str, &str)]) -> String {
        let mut path = location.template().to_string();
        for (key, value) in params {
            path = path.replace(&format!(":{key}"), &urlencoding::encode(value));
        }

        let base = if location.is_api() {
            &self.api_base
        } else {
            &self.html_base
        };
        format!("{base}{path}")
    }

    pub fn user_search_url(&self, term: &str) -> String {
        self.url_for(Location::ApiUserSearch, &[("query", term)])
    }

    pub fn repo_search_url(&self, term: &str) -> String {
        self.url_for(Location::ApiRepoSearch, &[("query", term)])
    }

    pub fn user_repos_url(&self, user: &str) -> String {
        self.url_for(Location::ApiUserRepos, &[("user", user)])
    }

    pub fn profile_url(&self, login: &str) -> String {
        self.url_for(Location::HtmlUser, &[("user", login)])
    }

    pub fn repo_url(&self, owner: &str, name: &str) -> String {
        self.url_for(Location::HtmlRepo, &[("user", owner), ("repo", name)])
    }

    pub fn search_url(&self, term: &str) -> String {
        self.url_for(Location::HtmlSearch, &[("query", term)])
    }

    /// Absolute URL for a path recorded in history (`/owner/repo`).
    pub fn history_url(&self, path: &str) -> String {
        format!("{}{}", self.html_base, path)
    }

    /// The path under the HTML host, unless `url` is elsewhere or is the search page.
    pub fn history_path(&self, url: &str) -> Option<String> {
        let rest = url.strip_prefix(&self.html_base)?;
        let path = rest.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_end_matches('/');

        if !path.starts_with('/') || path == "/search" || path.starts_with("/search/") {
            return None;
        }
        Some(path.to_string())
    }
}
