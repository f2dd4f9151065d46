// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! GitHub API payloads and the normalized records the formatters consume.
//!
//! The two repository endpoints answer with differently shaped JSON. Each
//! shape has its own `From` conversion into [`RepoRecord`], tagged with the
//! [`RecordSource`] it came from.

use serde::{Deserialize, Serialize};

/// Which upstream endpoint produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordSource {
    /// `GET /legacy/user/search/{term}`
    LegacyUserSearch,
    /// `GET /legacy/repos/search/{term}`
    LegacyRepoSearch,
    /// `GET /users/{user}/repos`
    UserRepoListing,
}

/// Response of the legacy user search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyUserSearchResponse {
    #[serde(default)]
    pub users: Vec<LegacyUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegacyUser {
    pub username: String,
    #[serde(default)]
    pub fullname: Option<String>,
}

/// Response of the legacy repository search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyRepoSearchResponse {
    #[serde(default)]
    pub repositories: Vec<LegacyRepo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegacyRepo {
    pub username: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One element of the per-user repository listing (a bare JSON array).
#[derive(Debug, Clone, Deserialize)]
pub struct UserRepo {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    pub owner: RepoOwner,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepoOwner {
    pub login: String,
}

/// A repository, independent of the endpoint that returned it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRecord {
    pub name: String,
    pub owner: String,
    pub description: String,
    /// Only the per-user listing hands us a ready-made link.
    pub html_url: Option<String>,
    pub source: RecordSource,
}

/// A user account, independent of the endpoint that returned it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub login: String,
    pub display_name: String,
    pub source: RecordSource,
}

impl From<LegacyUser> for UserRecord {
    fn from(user: LegacyUser) -> Self {
        Self {
            login: user.username,
            display_name: user.fullname.unwrap_or_default(),
            source: RecordSource::LegacyUserSearch,
        }
    }
}

impl From<LegacyRepo> for RepoRecord {
    fn from(repo: LegacyRepo) -> Self {
        Self {
            name: repo.name,
            owner: repo.username,
            description: repo.description.unwrap_or_default(),
            html_url: None,
            source: RecordSource::LegacyRepoSearch,
        }
    }
}

impl From<UserRepo> for RepoRecord {
    fn from(repo: UserRepo) -> Self {
        Self {
            name: repo.name,
            owner: repo.owner.login,
            description: repo.description.unwrap_or_default(),
            html_url: Some(repo.html_url),
            source: RecordSource::UserRepoListing,
        }
    }
}
