// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

pub mod cache;
pub mod clock;
pub mod debounce;
pub mod fetcher;
pub mod formatter;
pub mod history;
pub mod kv;
pub mod logging;
pub mod lookup;
pub mod markup;
pub mod omnibox;
pub mod router;
pub mod urls;
