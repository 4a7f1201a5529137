// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Locale**: Default locale and recently-used history bounds
//! - **Storage**: Persisted key names and state file name

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when nothing else resolves, and the last dictionary
/// consulted before falling back to the raw key.
pub const DEFAULT_LOCALE: &str = "en";

/// Maximum number of entries kept in the recently-used language list.
pub const RECENTLY_USED_CAPACITY: usize = 5;

// ==========================================================================
// Storage Defaults
// ==========================================================================

/// Storage key holding the selected locale code.
pub const SELECTED_LANGUAGE_KEY: &str = "selectedLanguage";

/// Storage key holding the JSON-encoded recently-used code list.
pub const RECENTLY_USED_KEY: &str = "recentlyUsedLanguages";

/// File name of the persisted locale state within the data directory.
pub const STATE_FILE: &str = "locale.cbor";

/// File name of user preferences within the config directory.
pub const CONFIG_FILE: &str = "settings.toml";
