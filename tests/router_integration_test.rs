// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use gh_omnibox::config::OmniboxConfig;
use gh_omnibox::services::clock::ManualClock;
use gh_omnibox::services::kv::{KeyValueStore, MemoryStore};
use gh_omnibox::services::omnibox::Omnibox;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// End-to-end tests of the suggestion pipeline against a mocked GitHub API.

fn config_for(server: &MockServer) -> OmniboxConfig {
    let mut config = OmniboxConfig::default();
    config.github.api_base = server.uri();
    config
}

fn seven_repositories() -> serde_json::Value {
    json!({
        "repositories": [
            {"username": "rails", "name": "rails", "description": "Ruby on Rails"},
            {"username": "rails", "name": "activerecord", "description": "ORM for RAILS apps"},
            {"username": "thoughtbot", "name": "suspenders", "description": "A Rails template"},
            {"username": "heartcombo", "name": "devise", "description": "Flexible authentication for Rails"},
            {"username": "railsware", "name": "upterm", "description": null},
            {"username": "rspec", "name": "rspec-rails", "description": "RSpec for Rails"},
            {"username": "sidekiq", "name": "sidekiq", "description": "Background jobs"}
        ]
    })
}

#[tokio::test]
async fn test_repo_lookup_returns_five_highlighted_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/legacy/repos/search/rails"))
        .respond_with(ResponseTemplate::new(200).set_body_json(seven_repositories()))
        .expect(1)
        .mount(&server)
        .await;

    let omnibox = Omnibox::new(
        &config_for(&server),
        Arc::new(MemoryStore::new()),
        Arc::new(ManualClock::new(0)),
    )
    .expect("Failed to build omnibox");

    let results = omnibox.suggest("Rails").await.expect("should emit");

    assert_eq!(results.len(), 5);
    assert_eq!(results[0].destination_url, "https://github.com/rails/rails");
    assert_eq!(results[4].destination_url, "https://github.com/railsware/upterm");

    for result in &results {
        let lower = result.description_markup.to_lowercase();
        let unmarked = lower.replace("<match>rails</match>", "");
        assert!(
            lower.contains("<match>rails</match>"),
            "missing match marker: {}",
            result.description_markup
        );
        assert!(
            !unmarked
                .replace("<url>", "")
                .replace("</url>", "")
                .replace("<dim>", "")
                .replace("</dim>", "")
                .contains("rails"),
            "unmarked occurrence left in: {}",
            result.description_markup
        );
    }

    assert_eq!(
        results[1].description_markup,
        "<url><match>rails</match>/activerecord</url> <dim>ORM for <match>RAILS</match> apps</dim>"
    );
}

#[tokio::test]
async fn test_repeated_query_is_served_from_cache_until_ttl() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/legacy/user/search/torvalds"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [{"username": "torvalds", "fullname": "Linus Torvalds"}]
        })))
        .expect(2)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let clock = Arc::new(ManualClock::new(1_700_000_000_000));
    let omnibox = Omnibox::new(&config, Arc::new(MemoryStore::new()), clock.clone())
        .expect("Failed to build omnibox");

    let first = omnibox.suggest("@torvalds").await.unwrap();
    let cached = omnibox.suggest("@torvalds").await.unwrap();
    assert_eq!(first, cached);

    clock.advance(config.cache.ttl);
    let refetched = omnibox.suggest("@torvalds").await.unwrap();
    assert_eq!(first, refetched);
}

#[tokio::test]
async fn test_expired_entries_are_swept_from_storage() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(seven_repositories()))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let store = Arc::new(MemoryStore::new());
    let clock = Arc::new(ManualClock::new(0));
    let omnibox = Omnibox::new(&config, store.clone(), clock.clone()).unwrap();

    omnibox.suggest("rails").await.unwrap();
    omnibox.suggest("sidekiq").await.unwrap();
    assert_eq!(store.keys().unwrap().len(), 2);

    clock.advance(config.cache.ttl + Duration::from_secs(1));
    assert_eq!(omnibox.cache().sweep(), 2);
    assert!(store.keys().unwrap().is_empty());
}

#[tokio::test]
async fn test_visited_pages_become_history_suggestions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let omnibox = Omnibox::new(
        &config_for(&server),
        Arc::new(MemoryStore::new()),
        Arc::new(ManualClock::new(0)),
    )
    .unwrap();

    omnibox.on_input_entered("https://github.com/tokio-rs/tokio");
    omnibox.on_input_entered("https://github.com/tokio-rs");
    omnibox.on_input_entered("tokio");

    let results = omnibox.suggest(":tokio").await.unwrap();
    let urls: Vec<_> = results.iter().map(|r| r.destination_url.as_str()).collect();

    assert_eq!(
        urls,
        vec!["https://github.com/tokio-rs", "https://github.com/tokio-rs/tokio"]
    );
    assert_eq!(
        results[0].description_markup,
        "<url>@<match>tokio</match>-rs</url> <dim></dim>"
    );
}

#[tokio::test]
async fn test_debounced_input_emits_only_for_last_keystroke() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/legacy/repos/search/rails"))
        .respond_with(ResponseTemplate::new(200).set_body_json(seven_repositories()))
        .expect(1)
        .mount(&server)
        .await;

    let omnibox = Omnibox::new(
        &config_for(&server),
        Arc::new(MemoryStore::new()),
        Arc::new(ManualClock::new(0)),
    )
    .unwrap();

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    for text in ["r", "ra", "rai", "rail", "rails"] {
        let tx = tx.clone();
        omnibox.on_input_changed(text, move |results| {
            let _ = tx.send(results);
        });
    }

    let results = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("no suggestions emitted")
        .unwrap();
    assert_eq!(results.len(), 5);

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(rx.try_recv().is_err(), "earlier keystrokes should not emit");
}
