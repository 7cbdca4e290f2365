//! Session store holding the bearer credential.
//!
//! The credential is persisted through a [`CredentialStorage`] backend so that it survives
//! reloads: `localStorage` in the browser and a JSON file in the user's data directory on
//! native targets. The [`Session`] is handed to components through the Dioxus context rather
//! than being read from ambient global storage.

pub mod storage;

#[cfg(target_arch = "wasm32")]
pub mod browser;
#[cfg(not(target_arch = "wasm32"))]
pub mod file;

use std::{fmt, rc::Rc};

use dioxus_logger::tracing;

use crate::client::{
    error::{precondition::PreconditionError, Error},
    session::storage::{CredentialStorage, MemoryStorage},
};

/// Storage key the credential is persisted under
pub const CREDENTIAL_KEY: &str = "token";

/// Opaque bearer token representing an authenticated session
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wraps a token, returning `None` for an empty token
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        (!token.is_empty()).then_some(Self(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Read/save/clear access to the persisted credential
#[derive(Clone)]
pub struct Session {
    storage: Rc<dyn CredentialStorage>,
}

impl Session {
    pub fn new(storage: impl CredentialStorage + 'static) -> Self {
        Self {
            storage: Rc::new(storage),
        }
    }

    /// Session backed by the durable storage of the current platform
    pub fn durable() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(browser::BrowserStorage)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            match file::FileStorage::default_location() {
                Some(storage) => Self::new(storage),
                None => {
                    tracing::warn!(
                        "No user data directory available; credential will not survive restarts"
                    );
                    Self::new(MemoryStorage::default())
                }
            }
        }
    }

    /// Returns the stored credential, if any
    ///
    /// Storage read failures are logged and treated as signed out.
    pub fn read(&self) -> Option<Credential> {
        match self.storage.get(CREDENTIAL_KEY) {
            Ok(token) => token.and_then(Credential::new),
            Err(err) => {
                tracing::error!("{}", err);
                None
            }
        }
    }

    pub fn save(&self, credential: &Credential) -> Result<(), Error> {
        self.storage.set(CREDENTIAL_KEY, credential.as_str())
    }

    pub fn clear(&self) -> Result<(), Error> {
        self.storage.remove(CREDENTIAL_KEY)
    }

    /// Returns the stored credential or the sign in precondition error
    pub fn require(&self) -> Result<Credential, Error> {
        self.read().ok_or_else(|| {
            tracing::debug!("Blocked action requiring a credential while signed out");
            Error::PreconditionError(PreconditionError::SignInRequired)
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(MemoryStorage::default())
    }
}
