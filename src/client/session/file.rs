use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use crate::client::{error::Error, session::storage::CredentialStorage};

const APP_DIR: &str = "collablab";
const FILE_NAME: &str = "session.json";

/// JSON file of key/value entries, the native counterpart of `localStorage`
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/collablab/session.json`, if the platform has a data directory
    pub fn default_location() -> Option<Self> {
        dirs::data_dir().map(|dir| Self::new(dir.join(APP_DIR).join(FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<HashMap<String, String>, Error> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }

        let raw = fs::read_to_string(&self.path).map_err(|e| {
            Error::StorageError(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        Ok(serde_json::from_str(&raw)?)
    }

    fn store(&self, entries: &HashMap<String, String>) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::StorageError(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        fs::write(&self.path, serde_json::to_string(entries)?).map_err(|e| {
            Error::StorageError(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

impl CredentialStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.store(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.store(&entries)?;
        }
        Ok(())
    }
}
