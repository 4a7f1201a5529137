// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the dashboard.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and persisted language selection.
//!
//! # Features
//!
//! - Static registry of supported locales with display metadata
//! - Embedded `.ftl` translation files, one per locale
//! - Locale resolution from persisted selection, then runtime preference
//! - Runtime language switching with a bounded recently-used history
//! - Fallback to the default locale, then to the key, when translations are missing

pub mod catalog;
pub mod context;
pub mod detect;
pub mod picker;
pub mod recent;
pub mod registry;

pub use catalog::{Catalog, Dictionary};
pub use context::{LanguageChange, LanguageContext, Resolution};
pub use detect::{FixedLocale, LocaleSource, PreferenceChain, SystemLocale};
pub use picker::PickerEntry;
pub use recent::RecentLanguages;
pub use registry::{LanguageRegistry, Locale};
