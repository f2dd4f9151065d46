// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use gh_omnibox::app::{create_router, AppState};
use gh_omnibox::config::OmniboxConfig;
use gh_omnibox::models::search::{NavigateResponse, SuggestResponse};
use gh_omnibox::services::clock::ManualClock;
use gh_omnibox::services::kv::MemoryStore;
use gh_omnibox::services::omnibox::Omnibox;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app_for(server: &MockServer) -> Router {
    let mut config = OmniboxConfig::default();
    config.github.api_base = server.uri();

    let omnibox = Omnibox::new(
        &config,
        Arc::new(MemoryStore::new()),
        Arc::new(ManualClock::new(0)),
    )
    .expect("Failed to build omnibox");

    create_router(AppState {
        omnibox: Arc::new(omnibox),
    })
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_suggest_returns_results_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/tokio-rs/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "tokio", "description": "A runtime <for> Rust", "html_url": "https://github.com/tokio-rs/tokio", "owner": {"login": "tokio-rs"}},
            {"name": "axum", "description": null, "html_url": "https://github.com/tokio-rs/axum", "owner": {"login": "tokio-rs"}}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let response = app_for(&server)
        .oneshot(
            Request::builder()
                .uri("/suggest?text=tokio-rs%2Ftok")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let suggest: SuggestResponse = body_json(response).await;
    assert_eq!(suggest.results.len(), 1);
    assert_eq!(
        suggest.results[0].destination_url,
        "https://github.com/tokio-rs/tokio"
    );
    assert_eq!(
        suggest.results[0].description_markup,
        "<url>tokio-rs/<match>tok</match>io</url> <dim>A runtime &lt;for&gt; Rust</dim>"
    );
}

#[tokio::test]
async fn test_suggest_upstream_failure_returns_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let response = app_for(&server)
        .oneshot(
            Request::builder()
                .uri("/suggest?text=rails")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_navigate_then_suggest_from_history() {
    let server = MockServer::start().await;
    let app = app_for(&server);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/navigate")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"text":"https://github.com/serde-rs/json"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let navigate: NavigateResponse = body_json(response).await;
    assert_eq!(navigate.url, "https://github.com/serde-rs/json");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/suggest?text=%3Aserde")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let suggest: SuggestResponse = body_json(response).await;
    assert_eq!(
        suggest.results[0].destination_url,
        "https://github.com/serde-rs/json"
    );
}
