//! Key-value preference persistence.
//!
//! The workbench keeps exactly two durable settings, the theme and the
//! sidebar width. Both go through [`PreferenceStore`] so tests can use the
//! in-memory [`MemoryStore`] while the command line uses [`FileStore`].

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const THEME_KEY: &str = "cyber-refactor-theme";
pub const SIDEBAR_WIDTH_KEY: &str = "cyber-refactor-sidebar-width";

/// A flat string-to-string settings area.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, persisting immediately.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
struct Entries(BTreeMap<String, String>);

/// Preferences that live only as long as the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Entries,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.0.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.0.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences stored as a JSON object in a single file.
///
/// The file is read once on [`FileStore::open`] and rewritten on every
/// [`set`](PreferenceStore::set). A missing file is an empty store.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Entries,
}

impl FileStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => Entries::default(),
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(err) if err.kind() == ErrorKind::NotFound => Entries::default(),
            Err(err) => return Err(err.into()),
        };
        log::debug!("prefs: loaded {} key(s) from {}", entries.0.len(), path.display());
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.0.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.0.insert(key.to_string(), value.to_string());
        let raw = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(THEME_KEY), None);
        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn file_store_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(SIDEBAR_WIDTH_KEY), None);
        store.set(SIDEBAR_WIDTH_KEY, "320").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(SIDEBAR_WIDTH_KEY).as_deref(), Some("320"));
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{not json").unwrap();
        assert!(FileStore::open(&path).is_err());
    }
}
