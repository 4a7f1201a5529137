// SPDX-License-Identifier: MPL-2.0
//! The static list of locales the dashboard ships translations for.

use crate::config::DEFAULT_LOCALE;

/// A supported language with its display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    /// Primary language subtag, e.g. `"en"`.
    pub code: &'static str,
    /// English display name.
    pub name: &'static str,
    /// Name of the language in the language itself.
    pub native_name: &'static str,
    /// Flag glyph shown next to the name in pickers.
    pub flag: &'static str,
}

const LOCALES: &[Locale] = &[
    Locale {
        code: "en",
        name: "English",
        native_name: "English",
        flag: "🇺🇸",
    },
    Locale {
        code: "es",
        name: "Spanish",
        native_name: "Español",
        flag: "🇪🇸",
    },
    Locale {
        code: "fr",
        name: "French",
        native_name: "Français",
        flag: "🇫🇷",
    },
    Locale {
        code: "de",
        name: "German",
        native_name: "Deutsch",
        flag: "🇩🇪",
    },
    Locale {
        code: "hi",
        name: "Hindi",
        native_name: "हिन्दी",
        flag: "🇮🇳",
    },
    Locale {
        code: "ta",
        name: "Tamil",
        native_name: "தமிழ்",
        flag: "🇮🇳",
    },
    Locale {
        code: "zh",
        name: "Chinese",
        native_name: "中文",
        flag: "🇨🇳",
    },
    Locale {
        code: "ja",
        name: "Japanese",
        native_name: "日本語",
        flag: "🇯🇵",
    },
];

/// Lookup over a fixed locale list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageRegistry {
    locales: &'static [Locale],
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LanguageRegistry {
    /// The locales bundled with the crate.
    #[must_use]
    pub const fn builtin() -> Self {
        Self { locales: LOCALES }
    }

    #[must_use]
    pub fn find(&self, code: &str) -> Option<&'static Locale> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.find(code).is_some()
    }

    /// The locale every lookup eventually falls back to.
    #[must_use]
    pub fn default_locale(&self) -> &'static Locale {
        self.find(DEFAULT_LOCALE).unwrap_or(&LOCALES[0])
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Locale> {
        self.locales.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &'static [Locale] {
        self.locales
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique() {
        let registry = LanguageRegistry::builtin();
        let codes: HashSet<_> = registry.iter().map(|l| l.code).collect();
        assert_eq!(codes.len(), registry.len());
    }

    #[test]
    fn default_locale_is_registered() {
        let registry = LanguageRegistry::builtin();
        assert_eq!(registry.default_locale().code, DEFAULT_LOCALE);
    }

    #[test]
    fn find_is_exact_match() {
        let registry = LanguageRegistry::builtin();
        assert_eq!(registry.find("ta").map(|l| l.name), Some("Tamil"));
        assert!(registry.find("TA").is_none());
        assert!(registry.find("en-US").is_none());
    }

    #[test]
    fn every_locale_has_display_metadata() {
        for locale in LanguageRegistry::builtin().iter() {
            assert!(!locale.name.is_empty(), "{} has no name", locale.code);
            assert!(!locale.native_name.is_empty(), "{} has no native name", locale.code);
            assert!(!locale.flag.is_empty(), "{} has no flag", locale.code);
        }
    }
}
