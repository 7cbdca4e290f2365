use dioxus::prelude::*;

use crate::client::{service::auth::AuthState, session::Credential};

/// Reactive mirror of the persisted credential
///
/// The [`Session`](crate::client::session::Session) is the source of truth; this store only
/// lets components re-render when the credential changes.
#[derive(Store, Clone, Default, PartialEq)]
pub struct SessionState {
    pub credential: Option<Credential>,
}

impl SessionState {
    pub fn auth_state(&self) -> AuthState {
        AuthState::of(self.credential.as_ref())
    }
}
