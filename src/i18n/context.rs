// SPDX-License-Identifier: MPL-2.0
//! The language context: current locale, recently-used history, and the
//! translate function, with persistence to a [`KeyValueStore`].
//!
//! A context only exists in its resolved state; [`LanguageContext::initialize`]
//! performs the one-time resolution from storage or the runtime preference.
//! After that, [`LanguageContext::set_language`] is the only mutation, and
//! every successful mutation is committed to storage immediately.

use super::catalog::Catalog;
use super::detect::{self, LocaleSource};
use super::picker::{self, PickerEntry};
use super::recent::RecentLanguages;
use super::registry::{LanguageRegistry, Locale};
use crate::config::defaults::{RECENTLY_USED_KEY, SELECTED_LANGUAGE_KEY};
use crate::storage::KeyValueStore;
use fluent_bundle::FluentArgs;
use std::rc::Rc;

/// Result of a [`LanguageContext::set_language`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageChange {
    /// The locale was adopted and persisted.
    Applied,
    /// The code is not in the registry; nothing changed.
    UnknownCode,
}

impl LanguageChange {
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, LanguageChange::Applied)
    }
}

/// Where the initial locale came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// A valid persisted selection.
    Persisted,
    /// The runtime language preference matched a registry locale.
    Detected,
    /// Nothing matched; the default locale was used.
    Default,
}

pub struct LanguageContext<S: KeyValueStore> {
    registry: LanguageRegistry,
    catalog: Rc<Catalog>,
    store: S,
    current: &'static Locale,
    recent: RecentLanguages,
    resolution: Resolution,
}

impl<S: KeyValueStore> std::fmt::Debug for LanguageContext<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageContext")
            .field("current", &self.current.code)
            .field("recent", &self.recent)
            .field("resolution", &self.resolution)
            .finish()
    }
}

impl<S: KeyValueStore> LanguageContext<S> {
    /// Resolves the initial session locale.
    ///
    /// A persisted, registered `selectedLanguage` wins outright and the
    /// runtime preference is not consulted. Otherwise the preference's
    /// primary subtag is matched against the registry, falling back to the
    /// default locale. Storage failures are logged and treated as absent
    /// values.
    pub fn initialize(
        registry: LanguageRegistry,
        catalog: Rc<Catalog>,
        store: S,
        preference: &dyn LocaleSource,
    ) -> Self {
        let persisted = read_logged(&store, SELECTED_LANGUAGE_KEY)
            .and_then(|code| registry.find(&code));

        let (current, resolution) = match persisted {
            Some(locale) => (locale, Resolution::Persisted),
            None => match preference
                .preferred_language()
                .and_then(|tag| detect::negotiate(&tag, &registry))
            {
                Some(locale) => (locale, Resolution::Detected),
                None => (registry.default_locale(), Resolution::Default),
            },
        };

        let recent = read_logged(&store, RECENTLY_USED_KEY)
            .and_then(|json| {
                RecentLanguages::from_json(&json, |code| registry.contains(code))
                    .map_err(|err| {
                        tracing::warn!(
                            key = RECENTLY_USED_KEY,
                            error = %err,
                            "ignoring unreadable recently-used list"
                        );
                    })
                    .ok()
            })
            .unwrap_or_default();

        tracing::debug!(locale = current.code, ?resolution, "language context resolved");

        Self {
            registry,
            catalog,
            store,
            current,
            recent,
            resolution,
        }
    }

    /// Switches to `code` and records it as most recently used.
    ///
    /// Codes outside the registry leave the context and storage untouched.
    pub fn set_language(&mut self, code: &str) -> LanguageChange {
        let Some(locale) = self.registry.find(code) else {
            tracing::debug!(code, "ignoring unknown language code");
            return LanguageChange::UnknownCode;
        };

        self.current = locale;
        self.recent.touch(locale.code);
        self.commit();
        LanguageChange::Applied
    }

    /// Writes the session state to storage. Failures are logged only.
    fn commit(&mut self) {
        if let Err(err) = self.store.set(SELECTED_LANGUAGE_KEY, self.current.code) {
            tracing::warn!(key = SELECTED_LANGUAGE_KEY, error = %err, "failed to persist language");
        }

        let written = self
            .recent
            .to_json()
            .and_then(|json| self.store.set(RECENTLY_USED_KEY, &json));
        if let Err(err) = written {
            tracing::warn!(
                key = RECENTLY_USED_KEY,
                error = %err,
                "failed to persist recently-used list"
            );
        }
    }

    /// Translates `key`: current locale, then the default locale, then the
    /// key itself.
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        self.catalog.resolve(self.current.code, key, None)
    }

    /// Like [`translate`](Self::translate), interpolating Fluent variables.
    #[must_use]
    pub fn translate_with_args(&self, key: &str, args: &FluentArgs) -> String {
        self.catalog.resolve(self.current.code, key, Some(args))
    }

    #[must_use]
    pub fn current_language_code(&self) -> &'static str {
        self.current.code
    }

    #[must_use]
    pub fn current_language(&self) -> &'static Locale {
        self.current
    }

    #[must_use]
    pub fn languages(&self) -> &'static [Locale] {
        self.registry.as_slice()
    }

    #[must_use]
    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// Recently-used codes, most recent first.
    #[must_use]
    pub fn recently_used(&self) -> &[String] {
        self.recent.as_slice()
    }

    /// Recently-used locales, most recent first.
    pub fn recently_used_languages(&self) -> impl Iterator<Item = &'static Locale> + '_ {
        self.recent
            .as_slice()
            .iter()
            .filter_map(|code| self.registry.find(code))
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Rows for a language picker: recent locales first, then the rest.
    #[must_use]
    pub fn picker_entries(&self) -> Vec<PickerEntry> {
        picker::entries(&self.registry, self.current.code, &self.recent)
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Gives back the storage handle.
    pub fn into_store(self) -> S {
        self.store
    }
}

fn read_logged<S: KeyValueStore>(store: &S, key: &str) -> Option<String> {
    store.get(key).unwrap_or_else(|err| {
        tracing::warn!(key, error = %err, "failed to read persisted language state");
        None
    })
}
