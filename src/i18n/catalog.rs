// SPDX-License-Identifier: MPL-2.0
//! Per-locale translation dictionaries backed by Fluent resources.
//!
//! Each registry locale has an embedded `assets/i18n/<code>.ftl` file.
//! A dotted key `group.name` addresses attribute `.name` of message
//! `group`; a key without a dot addresses a message value. Fluent ids
//! cannot contain dots, so every key maps to at most one pattern.

use super::registry::{LanguageRegistry, Locale};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use fluent_syntax::ast;
use rust_embed::RustEmbed;
use std::collections::{BTreeSet, HashMap};
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Splits `key` into a message id and an optional attribute name.
fn split_key(key: &str) -> (&str, Option<&str>) {
    match key.split_once('.') {
        Some((message, attribute)) => (message, Some(attribute)),
        None => (key, None),
    }
}

/// The flat key-to-string mapping for one locale.
pub struct Dictionary {
    code: &'static str,
    bundle: FluentBundle<FluentResource>,
    keys: BTreeSet<String>,
}

impl std::fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dictionary")
            .field("code", &self.code)
            .field("keys", &self.keys.len())
            .finish()
    }
}

impl Dictionary {
    /// Parses Fluent `source` for `locale`.
    ///
    /// Syntax errors and duplicate messages are logged; whatever parsed
    /// cleanly is kept.
    pub fn from_ftl(locale: &Locale, source: String) -> Self {
        let langid = locale
            .code
            .parse::<LanguageIdentifier>()
            .unwrap_or_default();
        let mut bundle = FluentBundle::new(vec![langid]);
        bundle.set_use_isolating(false);

        let resource = match FluentResource::try_new(source) {
            Ok(resource) => resource,
            Err((resource, errors)) => {
                tracing::warn!(
                    locale = locale.code,
                    errors = errors.len(),
                    "translation resource has syntax errors"
                );
                resource
            }
        };

        let mut keys = BTreeSet::new();
        for entry in resource.entries() {
            if let ast::Entry::Message(message) = entry {
                let id = message.id.name;
                if message.value.is_some() {
                    keys.insert(id.to_string());
                }
                for attribute in &message.attributes {
                    keys.insert(format!("{}.{}", id, attribute.id.name));
                }
            }
        }

        if let Err(errors) = bundle.add_resource(resource) {
            tracing::warn!(
                locale = locale.code,
                errors = errors.len(),
                "translation resource has conflicting messages"
            );
        }

        Self {
            code: locale.code,
            bundle,
            keys,
        }
    }

    /// A dictionary with no entries; every lookup misses.
    pub fn empty(locale: &Locale) -> Self {
        Self::from_ftl(locale, String::new())
    }

    #[must_use]
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Every key this dictionary resolves, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Formats the message for `key`, or `None` when this dictionary has no
    /// value for it.
    #[must_use]
    pub fn lookup(&self, key: &str, args: Option<&FluentArgs>) -> Option<String> {
        let (id, attribute) = split_key(key);
        let message = self.bundle.get_message(id)?;
        let pattern = match attribute {
            Some(name) => message.get_attribute(name)?.value(),
            None => message.value()?,
        };
        let mut errors = vec![];
        let value = self.bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            tracing::debug!(locale = self.code, key, errors = ?errors, "formatted with errors");
        }
        Some(value.into_owned())
    }
}

/// All dictionaries, keyed by locale code.
#[derive(Debug)]
pub struct Catalog {
    dictionaries: HashMap<&'static str, Dictionary>,
    default_code: &'static str,
}

impl Catalog {
    /// Loads the embedded resource of every locale in `registry`.
    ///
    /// A locale without a resource gets an empty dictionary.
    pub fn embedded(registry: &LanguageRegistry) -> Self {
        Self::from_sources(registry, |locale| {
            Asset::get(&format!("{}.ftl", locale.code))
                .map(|file| String::from_utf8_lossy(file.data.as_ref()).into_owned())
        })
    }

    /// Builds a catalog from an arbitrary per-locale source provider.
    pub fn from_sources(
        registry: &LanguageRegistry,
        mut source: impl FnMut(&Locale) -> Option<String>,
    ) -> Self {
        let dictionaries = registry
            .iter()
            .map(|locale| {
                let dictionary = match source(locale) {
                    Some(ftl) => Dictionary::from_ftl(locale, ftl),
                    None => {
                        tracing::warn!(locale = locale.code, "no translation resource");
                        Dictionary::empty(locale)
                    }
                };
                (locale.code, dictionary)
            })
            .collect();

        Self {
            dictionaries,
            default_code: registry.default_locale().code,
        }
    }

    #[must_use]
    pub fn dictionary(&self, code: &str) -> Option<&Dictionary> {
        self.dictionaries.get(code)
    }

    /// The dictionary every lookup ends with.
    #[must_use]
    pub fn default_dictionary(&self) -> Option<&Dictionary> {
        self.dictionary(self.default_code)
    }

    /// Dictionaries consulted for `code`, in order: the locale's own, then
    /// the default locale's (unless they are the same).
    #[must_use]
    pub fn fallback_chain(&self, code: &str) -> Vec<&Dictionary> {
        let mut chain = Vec::with_capacity(2);
        chain.extend(self.dictionary(code));
        if code != self.default_code {
            chain.extend(self.default_dictionary());
        }
        chain
    }

    /// Resolves `key` for `code` through the fallback chain, ending with the
    /// key itself.
    #[must_use]
    pub fn resolve(&self, code: &str, key: &str, args: Option<&FluentArgs>) -> String {
        self.fallback_chain(code)
            .into_iter()
            .find_map(|dictionary| dictionary.lookup(key, args))
            .unwrap_or_else(|| key.to_string())
    }
}
