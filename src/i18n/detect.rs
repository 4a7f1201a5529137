// SPDX-License-Identifier: MPL-2.0
//! Runtime language preference and its negotiation against the registry.

use super::registry::{LanguageRegistry, Locale};
use unic_langid::LanguageIdentifier;

/// Something that reports the user's preferred language, e.g. `"en-US"`.
pub trait LocaleSource {
    fn preferred_language(&self) -> Option<String>;
}

/// The operating system's reported locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocale;

impl LocaleSource for SystemLocale {
    fn preferred_language(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// A fixed preference, or none at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedLocale(pub Option<String>);

impl FixedLocale {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Some(tag.into()))
    }

    #[must_use]
    pub fn none() -> Self {
        Self(None)
    }
}

impl LocaleSource for FixedLocale {
    fn preferred_language(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Consults each source in order and reports the first preference found.
#[derive(Default)]
pub struct PreferenceChain {
    sources: Vec<Box<dyn LocaleSource>>,
}

impl PreferenceChain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, source: impl LocaleSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }
}

impl LocaleSource for PreferenceChain {
    fn preferred_language(&self) -> Option<String> {
        self.sources
            .iter()
            .find_map(|source| source.preferred_language())
    }
}

/// Extracts the primary language subtag: `"en-US"` → `"en"`, `"ta_IN"` → `"ta"`.
///
/// Returns `None` for an empty tag.
#[must_use]
pub fn primary_subtag(tag: &str) -> Option<String> {
    let tag = tag.trim();
    if let Ok(langid) = tag.parse::<LanguageIdentifier>() {
        if !langid.language.is_empty() {
            return Some(langid.language.as_str().to_string());
        }
    }
    // POSIX-style tags ("ta_IN.UTF-8") and other shapes unic-langid rejects
    tag.split(['-', '_', '.', '@'])
        .next()
        .filter(|primary| !primary.is_empty())
        .map(str::to_ascii_lowercase)
}

/// Matches a runtime preference against the registry by primary subtag.
#[must_use]
pub fn negotiate(tag: &str, registry: &LanguageRegistry) -> Option<&'static Locale> {
    primary_subtag(tag).and_then(|code| registry.find(&code))
}
