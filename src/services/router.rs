// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::models::query::Query;
use crate::models::search::SearchResult;
use crate::services::lookup::Lookups;
use tracing::{debug, warn};

/// Classifies omnibox input and dispatches it to exactly one lookup.
pub struct QueryRouter {
    lookups: Lookups,
    max_results: usize,
}

impl QueryRouter {
    pub fn new(lookups: Lookups, max_results: usize) -> Self {
        Self {
            lookups,
            max_results,
        }
    }

    pub fn classify(&self, input: &str) -> Query {
        Query::classify(input, self.lookups.has_history())
    }

    /// Run the lookup for `input`.
    ///
    /// `None` means nothing should be shown: the input was ignorable or the
    /// lookup failed (the failure is logged here).
    pub async fn route(&self, input: &str) -> Option<Vec<SearchResult>> {
        let query = self.classify(input);
        debug!(?query, "routing omnibox input");

        let outcome = match &query {
            Query::Ignored => return None,
            Query::UserSearch(name) => self.lookups.find_users(name).await,
            Query::RepoSearch(term) => self.lookups.find_repos(term).await,
            Query::RepoByUser { user, term } => self.lookups.find_repos_by_user(user, term).await,
            Query::HistorySearch(term) => Ok(self.lookups.find_history(term)),
        };

        match outcome {
            Ok(mut results) => {
                results.truncate(self.max_results);
                Some(results)
            }
            Err(e) => {
                warn!(?query, error = %e, "lookup failed, no suggestions");
                None
            }
        }
    }

    /// Call `emit` at most once with the results for `input`.
    pub async fn classify_and_dispatch<F>(&self, input: &str, emit: F)
    where
        F: FnOnce(Vec<SearchResult>),
    {
        if let Some(results) = self.route(input).await {
            emit(results);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GithubConfig;
    use crate::services::cache::CacheStore;
    use crate::services::clock::SystemClock;
    use crate::services::fetcher::Fetcher;
    use crate::services::history::HistoryStore;
    use crate::services::kv::MemoryStore;
    use crate::services::urls::UrlBuilder;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn router_for(server: &MockServer, with_history: bool) -> (QueryRouter, Option<Arc<HistoryStore>>) {
        let github = GithubConfig {
            html_base: "https://github.com".to_string(),
            api_base: server.uri(),
            user_agent: "gh-omnibox-test".to_string(),
        };
        let store = Arc::new(MemoryStore::new());
        let cache = Arc::new(CacheStore::new(
            store.clone(),
            Arc::new(SystemClock),
            Duration::from_secs(3600),
        ));
        let fetcher = Arc::new(Fetcher::new(&github, cache).unwrap());
        let history = with_history.then(|| Arc::new(HistoryStore::load(store, 100)));
        let lookups = Lookups::new(fetcher, UrlBuilder::new(&github), history.clone(), 5);

        (QueryRouter::new(lookups, 5), history)
    }

    #[tokio::test]
    async fn test_ignored_inputs_never_reach_the_network() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(0)
            .mount(&server)
            .await;

        let (router, _) = router_for(&server, true);
        for input in ["", "  ", "@", "/rails", "/"] {
            let mut emitted = false;
            router
                .classify_and_dispatch(input, |_| emitted = true)
                .await;
            assert!(!emitted, "{input:?} should not emit");
        }
    }

    #[tokio::test]
    async fn test_user_search_routes_to_user_lookup() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/legacy/user/search/torvalds"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "users": [{"username": "torvalds", "fullname": "Linus Torvalds"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (router, _) = router_for(&server, false);
        let results = router.route("@Torvalds").await.unwrap();

        assert_eq!(
            results,
            vec![SearchResult::new(
                "https://github.com/torvalds",
                "<url>@<match>torvalds</match></url> <dim>Linus <match>Torvalds</match></dim>"
            )]
        );
    }

    #[tokio::test]
    async fn test_repo_search_routes_to_repo_lookup() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/legacy/repos/search/rails"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "repositories": [
                    {"username": "rails", "name": "rails", "description": "Ruby on Rails"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (router, _) = router_for(&server, false);
        let results = router.route("rails").await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].destination_url, "https://github.com/rails/rails");
        assert!(results[0]
            .description_markup
            .starts_with("<url><match>rails</match>/<match>rails</match></url>"));
    }

    #[tokio::test]
    async fn test_repo_by_user_filters_client_side() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/rails/repos"))
            .and(query_param("sort", "pushed"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"name": "rails", "description": null, "html_url": "https://github.com/rails/rails", "owner": {"login": "rails"}},
                {"name": "ActionView", "description": "views", "html_url": "https://github.com/rails/actionview", "owner": {"login": "rails"}},
                {"name": "actionview-legacy", "description": "old", "html_url": "https://github.com/rails/actionview-legacy", "owner": {"login": "rails"}}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let (router, _) = router_for(&server, false);
        let results = router.route("rails/actionview").await.unwrap();

        let urls: Vec<_> = results.iter().map(|r| r.destination_url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://github.com/rails/actionview",
                "https://github.com/rails/actionview-legacy"
            ]
        );
        assert_eq!(
            results[0].description_markup,
            "<url>rails/<match>ActionView</match></url> <dim>views</dim>"
        );
    }

    #[tokio::test]
    async fn test_history_search_is_most_recent_first() {
        let server = MockServer::start().await;
        let (router, history) = router_for(&server, true);
        let history = history.unwrap();
        for i in 0..7 {
            history.push(&format!("/foo/project-{i}"));
        }
        history.push("/unrelated");

        let results = router.route(":foo").await.unwrap();

        assert_eq!(results.len(), 5);
        assert_eq!(results[0].destination_url, "https://github.com/foo/project-6");
        assert_eq!(results[4].destination_url, "https://github.com/foo/project-2");
    }

    #[tokio::test]
    async fn test_failed_lookup_does_not_emit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let (router, _) = router_for(&server, false);
        let mut emitted = None;
        router
            .classify_and_dispatch("rails", |results| emitted = Some(results))
            .await;

        assert!(emitted.is_none());
    }

    #[tokio::test]
    async fn test_empty_upstream_list_still_emits() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"users": []})))
            .mount(&server)
            .await;

        let (router, _) = router_for(&server, false);
        assert_eq!(router.route("@nobody").await, Some(vec![]));
    }
}
