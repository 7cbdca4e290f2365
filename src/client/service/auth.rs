use dioxus_logger::tracing;

use crate::{
    client::{
        api::{transport::Transport, ApiClient},
        error::Error,
        session::{Credential, Session},
    },
    model::auth::{SignInDto, SignUpDto},
};

pub const SIGN_OUT_FAILED: &str = "Sign out failed, please try again";

/// Whether the auth form signs in to an existing account or creates a new one
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn toggle(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::SignIn => "Sign in",
            Self::SignUp => "Create account",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign in",
            Self::SignUp => "Sign up",
        }
    }
}

/// Which view the auth gate renders
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated,
}

impl AuthState {
    pub fn of(credential: Option<&Credential>) -> Self {
        match credential {
            Some(_) => Self::Authenticated,
            None => Self::Unauthenticated,
        }
    }
}

/// Raw values of the auth form; `name` is only sent when signing up
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Signs in or up and persists the returned credential
///
/// # Returns
/// - `Ok(Credential)` - Backend issued a token which is now stored in the session
/// - `Err(Error::AuthError)` - Backend refused; the message is its `detail` text
/// - `Err(Error::StorageError)` - Token could not be persisted
pub async fn authenticate<T: Transport>(
    client: &ApiClient<T>,
    session: &Session,
    mode: AuthMode,
    form: &AuthForm,
) -> Result<Credential, Error> {
    let credential = match mode {
        AuthMode::SignIn => {
            client
                .sign_in(&SignInDto {
                    email: form.email.clone(),
                    password: form.password.clone(),
                })
                .await?
        }
        AuthMode::SignUp => {
            client
                .sign_up(&SignUpDto {
                    name: form.name.clone(),
                    email: form.email.clone(),
                    password: form.password.clone(),
                })
                .await?
        }
    };

    session.save(&credential)?;

    tracing::info!("Authenticated as {}", form.email);

    Ok(credential)
}

/// Clears the stored credential
///
/// On failure the credential is still stored, so the caller must keep the user signed in.
pub fn sign_out(session: &Session) -> Result<(), Error> {
    session.clear()?;

    tracing::info!("Signed out");

    Ok(())
}
