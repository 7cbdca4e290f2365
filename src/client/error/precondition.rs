use thiserror::Error;

/// Local requirements checked before a request is sent
///
/// The display text is the prompt shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreconditionError {
    #[error("Sign in first")]
    SignInRequired,
    #[error("Please attach a document")]
    DocumentRequired,
}
