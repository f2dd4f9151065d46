// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Application state, route handlers, and router construction.
//!
//! The HTTP API is one possible omnibox host: the browser side debounces
//! keystrokes itself and calls `/suggest`, then reports the accepted entry to
//! `/navigate`.
//!
//! This module is `pub` so that integration tests can build a test router directly
//! without starting the full binary.

use crate::config::VERSION;
use crate::models::search::{
    NavigateRequest, NavigateResponse, SuggestRequest, SuggestResponse, SweepResponse,
};
use crate::models::version::VersionResponse;
use crate::services::omnibox::Omnibox;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Shared application state injected into every route handler via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    pub omnibox: Arc<Omnibox>,
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

pub async fn version_handler() -> Json<VersionResponse> {
    Json(VersionResponse {
        agent: "gh-omnibox".to_string(),
        version: VERSION.to_string(),
    })
}

/// 200 with results when the router emitted, 204 when it stayed silent.
pub async fn suggest_handler(
    State(state): State<AppState>,
    Query(request): Query<SuggestRequest>,
) -> Response {
    match state.omnibox.suggest(&request.text).await {
        Some(results) => Json(SuggestResponse { results }).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

pub async fn navigate_handler(
    State(state): State<AppState>,
    Json(payload): Json<NavigateRequest>,
) -> Result<Json<NavigateResponse>, (StatusCode, String)> {
    if payload.text.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Text cannot be empty".to_string()));
    }

    Ok(Json(NavigateResponse {
        url: state.omnibox.on_input_entered(&payload.text),
    }))
}

pub async fn sweep_cache_handler(State(state): State<AppState>) -> Json<SweepResponse> {
    Json(SweepResponse {
        removed: state.omnibox.cache().sweep(),
    })
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/version", get(version_handler))
        .route("/suggest", get(suggest_handler))
        .route("/navigate", post(navigate_handler))
        .route("/cache", delete(sweep_cache_handler))
        .with_state(state)
}
