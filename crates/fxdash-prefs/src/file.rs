//! JSON file preference store.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::{PreferenceStore, PrefsError, Result};

/// Current on-disk format version.
pub const FORMAT_VERSION: u32 = 1;

const FILE_NAME: &str = "preferences.json";

#[derive(Serialize)]
struct VersionedRef<'a> {
    version: u32,
    entries: &'a BTreeMap<String, String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredFile {
    Versioned {
        version: u32,
        entries: BTreeMap<String, String>,
    },
    // Flat key/value object written before the format was versioned.
    Legacy(BTreeMap<String, String>),
}

/// Preference store backed by a JSON file.
///
/// The file is read once on open. Every [`PreferenceStore::set`] rewrites the
/// whole file through a temporary sibling that is renamed over the target, so
/// a crash mid-write leaves the previous file intact.
///
/// Files holding a flat `{ key: value }` object are read as-is and rewritten
/// in the versioned layout on the next write.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`. A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// was written by a newer format version.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            load(&path)?
        } else {
            debug!(path = %path.display(), "no preference file yet");
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    /// Returns the default preference file location.
    ///
    /// - Linux: `~/.local/share/fxdash/preferences.json`
    /// - macOS: `~/Library/Application Support/fxdash/preferences.json`
    /// - Windows: `C:\Users\<User>\AppData\Roaming\fxdash\preferences.json`
    ///
    /// Falls back to `~/.fxdash/preferences.json`.
    #[must_use]
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("", "", "fxdash")
            .map_or_else(dirs_fallback, |proj_dirs| proj_dirs.data_dir().to_path_buf())
            .join(FILE_NAME)
    }

    /// Opens the store at [`Self::default_path`].
    ///
    /// # Errors
    ///
    /// See [`Self::open`].
    pub fn open_default() -> Result<Self> {
        Self::open(Self::default_path())
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every entry, ordered by key.
    #[must_use]
    pub const fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| PrefsError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(&VersionedRef {
            version: FORMAT_VERSION,
            entries,
        })?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| PrefsError::WriteFile {
            path: tmp.clone(),
            source: e,
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| PrefsError::WriteFile {
            path: self.path.clone(),
            source: e,
        })?;

        trace!(path = %self.path.display(), entries = entries.len(), "preferences saved");
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut next = self.entries.clone();
        next.insert(key.to_string(), value.to_string());
        self.persist(&next)?;
        self.entries = next;
        Ok(())
    }
}

fn load(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = fs::read_to_string(path).map_err(|e| PrefsError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    let stored: StoredFile = serde_json::from_str(&content).map_err(|e| PrefsError::ParseJson {
        path: path.to_path_buf(),
        source: e,
    })?;

    match stored {
        StoredFile::Versioned { version, entries } if version <= FORMAT_VERSION => Ok(entries),
        StoredFile::Versioned { version, .. } => Err(PrefsError::UnsupportedVersion {
            path: path.to_path_buf(),
            found: version,
        }),
        StoredFile::Legacy(entries) => {
            debug!(path = %path.display(), "read unversioned preference file");
            Ok(entries)
        }
    }
}

fn dirs_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".fxdash")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(temp_dir.path().join("prefs.json")).unwrap();
        assert!(store.entries().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_set_writes_through() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("prefs.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("currency_EURUSD", "true").unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["version"], 1);
        assert_eq!(raw["entries"]["currency_EURUSD"], "true");
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_reopen_sees_values() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prefs.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("currency_timeframe", "YTD").unwrap();
        store.set("currency_tab_selection", "1").unwrap();
        drop(store);

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("currency_timeframe").as_deref(), Some("YTD"));
        assert_eq!(store.get("currency_tab_selection").as_deref(), Some("1"));
    }

    #[test]
    fn test_legacy_flat_file_upgraded_on_write() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prefs.json");
        fs::write(&path, r#"{"currency_EURUSD":"true","currency_timeframe":"6M"}"#).unwrap();

        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("currency_EURUSD").as_deref(), Some("true"));

        store.set("currency_USDCAD", "true").unwrap();
        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["version"], 1);
        assert_eq!(raw["entries"]["currency_timeframe"], "6M");
        assert_eq!(raw["entries"]["currency_USDCAD"], "true");
    }

    #[test]
    fn test_newer_version_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prefs.json");
        fs::write(&path, r#"{"version":7,"entries":{}}"#).unwrap();

        assert!(matches!(
            FileStore::open(&path),
            Err(PrefsError::UnsupportedVersion { found: 7, .. })
        ));
    }

    #[test]
    fn test_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            FileStore::open(&path),
            Err(PrefsError::ParseJson { .. })
        ));
    }

    #[test]
    fn test_failed_write_keeps_previous_value() {
        let temp_dir = TempDir::new().unwrap();
        // The target is a directory, so the rename over it fails.
        let path = temp_dir.path().join("prefs.json");
        let mut store = FileStore::open(&path).unwrap();
        store.set("currency_EURUSD", "true").unwrap();

        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        assert!(store.set("currency_EURUSD", "false").is_err());
        assert_eq!(store.get("currency_EURUSD").as_deref(), Some("true"));
    }

    #[test]
    fn test_default_path() {
        let path = FileStore::default_path();
        assert!(path.ends_with("preferences.json"));
        assert!(path.to_string_lossy().contains("fxdash"));
    }
}
