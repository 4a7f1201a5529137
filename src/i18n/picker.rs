// SPDX-License-Identifier: MPL-2.0
//! Row model for the language picker.

use super::recent::RecentLanguages;
use super::registry::{LanguageRegistry, Locale};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerEntry {
    pub locale: &'static Locale,
    pub is_current: bool,
    pub is_recent: bool,
}

impl PickerEntry {
    /// `"🇫🇷 Français (French)"`, or just the native name when it equals
    /// the English one.
    #[must_use]
    pub fn label(&self) -> String {
        let locale = self.locale;
        if locale.native_name == locale.name {
            format!("{} {}", locale.flag, locale.native_name)
        } else {
            format!("{} {} ({})", locale.flag, locale.native_name, locale.name)
        }
    }
}

/// Recent locales in recency order, followed by the remaining registry
/// locales in registry order.
#[must_use]
pub fn entries(
    registry: &LanguageRegistry,
    current: &str,
    recent: &RecentLanguages,
) -> Vec<PickerEntry> {
    let entry = |locale: &'static Locale| PickerEntry {
        locale,
        is_current: locale.code == current,
        is_recent: recent.contains(locale.code),
    };

    let recent_rows = recent
        .as_slice()
        .iter()
        .filter_map(|code| registry.find(code));
    let other_rows = registry.iter().filter(|locale| !recent.contains(locale.code));

    recent_rows.chain(other_rows).map(entry).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_locales_come_first() {
        let registry = LanguageRegistry::builtin();
        let mut recent = RecentLanguages::new();
        recent.touch("ta");
        recent.touch("fr");

        let rows = entries(&registry, "fr", &recent);
        let codes: Vec<_> = rows.iter().map(|row| row.locale.code).collect();

        assert_eq!(codes[..2], ["fr", "ta"]);
        assert_eq!(codes[2..], ["en", "es", "de", "hi", "zh", "ja"]);
        assert!(rows[0].is_current && rows[0].is_recent);
        assert!(!rows[1].is_current && rows[1].is_recent);
        assert!(!rows[2].is_current && !rows[2].is_recent);
    }

    #[test]
    fn every_locale_listed_once() {
        let registry = LanguageRegistry::builtin();
        let rows = entries(&registry, "en", &RecentLanguages::new());
        assert_eq!(rows.len(), registry.len());
        assert_eq!(rows.iter().filter(|row| row.is_current).count(), 1);
    }

    #[test]
    fn label_includes_english_name_when_different() {
        let registry = LanguageRegistry::builtin();
        let fr = PickerEntry {
            locale: registry.find("fr").unwrap(),
            is_current: false,
            is_recent: false,
        };
        let en = PickerEntry {
            locale: registry.find("en").unwrap(),
            ..fr
        };
        assert_eq!(fr.label(), "🇫🇷 Français (French)");
        assert_eq!(en.label(), "🇺🇸 English");
    }
}
