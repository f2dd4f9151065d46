// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Description markup for the three kinds of suggestion lines.

use crate::services::markup::{highlight, sanitize, tag, truncate_chars};

/// Repository descriptions are cut to this many characters before escaping.
pub const DESCRIPTION_MAX_CHARS: usize = 60;

/// `<url>@login</url> <dim>Display Name</dim>`, both highlighted.
pub fn user_description(login: &str, display_name: &str, query: &str) -> String {
    let query = sanitize(query);
    let login = highlight(&sanitize(login), &query);
    let name = highlight(&sanitize(display_name), &query);

    format!("{} {}", tag("url", &format!("@{login}")), tag("dim", &name))
}

/// `<url>owner/name</url> <dim>description</dim>`.
///
/// Name and description are always highlighted; the owner only when
/// `highlight_owner` is set (global search, where the owner may be what matched).
pub fn repo_description(
    owner: &str,
    name: &str,
    description: &str,
    query: &str,
    highlight_owner: bool,
) -> String {
    let query = sanitize(query);
    let mut owner = sanitize(owner);
    let name = highlight(&sanitize(name), &query);
    let description = highlight(
        &sanitize(truncate_chars(description, DESCRIPTION_MAX_CHARS)),
        &query,
    );

    if highlight_owner {
        owner = highlight(&owner, &query);
    }

    format!(
        "{} {}",
        tag("url", &format!("{owner}/{name}")),
        tag("dim", &description)
    )
}

/// A history path: `/login` renders like a user line, anything deeper as a URL span.
pub fn history_description(path: &str, query: &str) -> String {
    let rest = path.strip_prefix('/').unwrap_or(path);

    if !rest.contains('/') {
        return user_description(rest, "", query);
    }

    tag("url", &highlight(&sanitize(path), &sanitize(query)))
}
