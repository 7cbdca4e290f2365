use web_sys::Storage;

use crate::client::{error::Error, session::storage::CredentialStorage};

/// `window.localStorage`
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Result<Storage, Error> {
        web_sys::window()
            .ok_or_else(|| Error::StorageError("No window available".to_string()))?
            .local_storage()
            .map_err(|e| Error::StorageError(format!("{:?}", e)))?
            .ok_or_else(|| Error::StorageError("localStorage is disabled".to_string()))
    }
}

impl CredentialStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| Error::StorageError(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| Error::StorageError(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        Self::local_storage()?
            .remove_item(key)
            .map_err(|e| Error::StorageError(format!("{:?}", e)))
    }
}
