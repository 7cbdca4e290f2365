//! Error types for the CollabLab client.
//!
//! Every fallible client operation returns [`Error`]. Failures are grouped the way they
//! are presented to the user: authentication failures carry the backend's message verbatim,
//! precondition failures block the user with a prompt before any request is made, and every
//! other failure is collapsed into short outcome text by the component that triggered it.

pub mod config;
pub mod precondition;

use thiserror::Error;

use crate::client::error::{config::ConfigError, precondition::PreconditionError};

/// Main error type for the CollabLab client.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid client configuration (backend URL).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A local requirement was not met; no request was sent.
    #[error(transparent)]
    PreconditionError(#[from] PreconditionError),
    /// Sign in or sign up was refused, carrying the message reported by the backend.
    #[error("{0}")]
    AuthError(String),
    /// The backend answered with a non-success status code.
    #[error("Request failed with status {status}: {message}")]
    RequestFailed { status: u16, message: String },
    /// The request never produced a response (network failure, CORS, invalid URL).
    #[error("Failed to send request: {0}")]
    TransportError(String),
    /// A response body could not be decoded or a request body could not be encoded.
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    /// The credential could not be read from or written to durable storage.
    #[error("Failed to access credential storage: {0}")]
    StorageError(String),
}

impl Error {
    /// Message shown to the user for this error.
    ///
    /// Precondition and authentication failures keep their full message, everything else
    /// falls back to `fallback` so network, validation and authorization errors are not
    /// distinguished in the UI.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::PreconditionError(err) => err.to_string(),
            Self::AuthError(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}
