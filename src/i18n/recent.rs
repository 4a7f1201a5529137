// SPDX-License-Identifier: MPL-2.0
//! Bounded, most-recent-first history of selected locale codes.

use crate::config::RECENTLY_USED_CAPACITY;
use crate::error::Result;

/// Recently-used locale codes, most recent first, without duplicates and
/// never longer than [`RECENTLY_USED_CAPACITY`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentLanguages(Vec<String>);

impl RecentLanguages {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from arbitrary codes, keeping the first occurrence of
    /// each code accepted by `is_known` and truncating to capacity.
    pub fn sanitized<I, S>(codes: I, is_known: impl Fn(&str) -> bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Vec::with_capacity(RECENTLY_USED_CAPACITY);
        for code in codes {
            let code = code.into();
            if is_known(&code) && !list.contains(&code) {
                list.push(code);
            }
            if list.len() == RECENTLY_USED_CAPACITY {
                break;
            }
        }
        Self(list)
    }

    /// Moves `code` to the front, dropping its older occurrence and the
    /// oldest entry beyond capacity.
    pub fn touch(&mut self, code: &str) {
        self.0.retain(|existing| existing != code);
        self.0.insert(0, code.to_string());
        self.0.truncate(RECENTLY_USED_CAPACITY);
    }

    /// Decodes the persisted JSON array form.
    pub fn from_json(json: &str, is_known: impl Fn(&str) -> bool) -> Result<Self> {
        let codes: Vec<String> = serde_json::from_str(json)?;
        Ok(Self::sanitized(codes, is_known))
    }

    /// Encodes the list as a JSON array, most recent first.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.0)?)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.0.iter().any(|c| c == code)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn any(_: &str) -> bool {
        true
    }

    #[test]
    fn touch_moves_existing_code_to_front() {
        let mut recent = RecentLanguages::new();
        recent.touch("es");
        recent.touch("fr");
        recent.touch("es");
        assert_eq!(recent.as_slice(), ["es", "fr"]);
    }

    #[test]
    fn touch_drops_oldest_beyond_capacity() {
        let mut recent = RecentLanguages::new();
        for code in ["en", "es", "fr", "de", "hi", "ta"] {
            recent.touch(code);
        }
        assert_eq!(recent.as_slice(), ["ta", "hi", "de", "fr", "es"]);
    }

    #[test]
    fn sanitized_removes_duplicates_and_unknown_codes() {
        let recent = RecentLanguages::sanitized(["fr", "xx", "fr", "de"], |c| c != "xx");
        assert_eq!(recent.as_slice(), ["fr", "de"]);
    }

    #[test]
    fn sanitized_truncates_to_capacity() {
        let recent = RecentLanguages::sanitized(["a", "b", "c", "d", "e", "f", "g"], any);
        assert_eq!(recent.len(), RECENTLY_USED_CAPACITY);
        assert_eq!(recent.as_slice()[0], "a");
    }

    #[test]
    fn json_form_is_a_plain_array() {
        let mut recent = RecentLanguages::new();
        recent.touch("de");
        recent.touch("ja");
        assert_eq!(recent.to_json().unwrap(), r#"["ja","de"]"#);
    }

    #[test]
    fn from_json_rejects_non_array() {
        assert!(RecentLanguages::from_json(r#"{"en":1}"#, any).is_err());
        assert!(RecentLanguages::from_json("not json", any).is_err());
    }
}
