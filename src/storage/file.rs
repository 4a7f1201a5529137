// SPDX-License-Identifier: MPL-2.0
//! File-backed key/value storage using CBOR format.
//!
//! The whole map is kept in a single CBOR file. Every `get` reads the file
//! and every `set`/`remove` rewrites it, mirroring the synchronous
//! read-through/write-through behaviour of browser local storage.
//!
//! # Path Resolution
//!
//! 1. Use [`FileStore::at`] with an explicit file path
//! 2. [`FileStore::in_data_dir`] with an optional directory override, which
//!    falls back to `LEARNBOARD_DATA_DIR` and then the platform data directory

use super::KeyValueStore;
use crate::app::paths;
use crate::config::defaults::STATE_FILE;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

type Entries = BTreeMap<String, String>;

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Uses `path` as the backing file. The file need not exist yet.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses `locale.cbor` inside the resolved data directory.
    pub fn in_data_dir(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = paths::get_app_data_dir_with_override(base_dir)
            .ok_or_else(|| Error::Storage("cannot determine data directory".to_string()))?;
        path.push(STATE_FILE);
        Ok(Self::at(path))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }
        let reader = BufReader::new(fs::File::open(&self.path)?);
        Ok(ciborium::from_reader(reader)?)
    }

    /// Reads the current map for a write. A corrupt file is replaced rather
    /// than blocking every future write.
    fn read_entries_for_update(&self) -> Entries {
        self.read_entries().unwrap_or_else(|err| {
            tracing::warn!(
                path = %self.path.display(),
                error = %err,
                "discarding unreadable locale state"
            );
            Entries::new()
        })
    }

    fn write_entries(&self, entries: &Entries) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let writer = BufWriter::new(fs::File::create(&self.path)?);
        ciborium::into_writer(entries, writer)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_entries_for_update();
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut entries = self.read_entries_for_update();
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn get_from_missing_file_is_none() {
        let temp_dir = tempdir().expect("create temp dir");
        let store = FileStore::at(temp_dir.path().join("locale.cbor"));
        assert!(store.get("selectedLanguage").unwrap().is_none());
    }

    #[test]
    fn set_persists_across_instances() {
        let temp_dir = tempdir().expect("create temp dir");
        let path = temp_dir.path().join("locale.cbor");

        let mut store = FileStore::at(&path);
        store.set("selectedLanguage", "de").unwrap();
        store.set("recentlyUsedLanguages", "[\"de\"]").unwrap();

        let reopened = FileStore::at(&path);
        assert_eq!(
            reopened.get("selectedLanguage").unwrap().as_deref(),
            Some("de")
        );
        assert_eq!(
            reopened.get("recentlyUsedLanguages").unwrap().as_deref(),
            Some("[\"de\"]")
        );
    }

    #[test]
    fn set_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested = temp_dir.path().join("nested").join("deeply");

        let mut store = FileStore::in_data_dir(Some(nested.clone())).unwrap();
        store.set("selectedLanguage", "fr").unwrap();

        assert!(nested.join(STATE_FILE).exists());
    }

    #[test]
    fn corrupted_file_fails_get_but_not_set() {
        let temp_dir = tempdir().expect("create temp dir");
        let path = temp_dir.path().join("locale.cbor");
        fs::write(&path, "not valid cbor data").expect("write file");

        let mut store = FileStore::at(&path);
        assert!(matches!(store.get("selectedLanguage"), Err(Error::Storage(_))));

        store.set("selectedLanguage", "es").unwrap();
        assert_eq!(store.get("selectedLanguage").unwrap().as_deref(), Some("es"));
    }

    #[test]
    fn remove_deletes_only_the_given_key() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut store = FileStore::at(temp_dir.path().join("locale.cbor"));
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();

        store.remove("a").unwrap();

        assert!(store.get("a").unwrap().is_none());
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }
}
