// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

pub mod cache;
pub mod github;
pub mod query;
pub mod search;
pub mod version;
