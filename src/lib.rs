// SPDX-License-Identifier: MPL-2.0
//! `learnboard` is the localization layer of the learning-platform dashboard.
//!
//! It provides a static locale registry, embedded Fluent dictionaries with a
//! current-locale → default-locale → key fallback chain, and a
//! [`LanguageContext`](i18n::LanguageContext) that resolves the session
//! language once and persists every switch through a swappable
//! [`KeyValueStore`](storage::KeyValueStore).

#![doc(html_root_url = "https://docs.rs/learnboard/0.3.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod storage;
