//! JSON-file key-value store
//!
//! The file holds a single JSON object of string values. Every read goes to
//! disk so a second process sees changes on its next read; writes replace the
//! whole file through a temporary sibling and a rename.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crmdesk_core::KeyValueStore;
use crmdesk_domain::{CrmError, Result};
use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::errors::InfraError;

type Entries = BTreeMap<String, String>;

/// Store persisted as a JSON object file
#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Use `path` as the backing file. The file is created on first write.
    ///
    /// # Errors
    /// Returns `CrmError::Storage` if `path` names a directory.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.is_dir() {
            return Err(CrmError::Storage(format!(
                "storage path is a directory: {}",
                path.display()
            )));
        }
        debug!(path = %path.display(), "opened file store");
        Ok(Self { path, lock: Mutex::new(()) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(InfraError::from(e).into()),
        };

        if contents.trim().is_empty() {
            return Ok(Entries::new());
        }

        match serde_json::from_str(&contents) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                // Unreadable contents are treated as empty and replaced on the next write
                warn!(path = %self.path.display(), error = %e, "discarding malformed storage file");
                Ok(Entries::new())
            }
        }
    }

    fn write_entries(&self, entries: &Entries) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(InfraError::from)?;
        }

        let bytes = serde_json::to_vec_pretty(entries).map_err(InfraError::from)?;
        let temp_path = self.path.with_extension("tmp");
        std::fs::write(&temp_path, bytes).map_err(InfraError::from)?;
        std::fs::rename(&temp_path, &self.path).map_err(InfraError::from)?;
        Ok(())
    }

    fn update(&self, apply: impl FnOnce(&mut Entries)) -> Result<()> {
        let _guard = self.lock.lock();
        let mut entries = self.read_entries()?;
        apply(&mut entries);
        self.write_entries(&entries)
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock();
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.update(|entries| {
            entries.remove(key);
        })
    }

    fn set_many(&self, pairs: &[(&str, &str)]) -> Result<()> {
        self.update(|entries| {
            for (key, value) in pairs {
                entries.insert((*key).to_string(), (*value).to_string());
            }
        })
    }

    fn remove_many(&self, keys: &[&str]) -> Result<()> {
        self.update(|entries| {
            for key in keys {
                entries.remove(*key);
            }
        })
    }
}
