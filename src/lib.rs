// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! GitHub suggestions for a browser omnibox.
//!
//! Free text is classified into a user, repository, repository-by-user or
//! history search, looked up against the GitHub API through a TTL cache, and
//! turned into at most five `(url, markup)` suggestion lines.

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
