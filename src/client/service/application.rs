use dioxus_logger::tracing;

use crate::client::{
    api::{
        transport::{Document, Transport},
        ApiClient, ApplicationForm,
    },
    error::{precondition::PreconditionError, Error},
    session::Session,
};

pub const DEFAULT_MESSAGE: &str = "I would love to collaborate!";
pub const DEFAULT_PORTFOLIO_URL: &str = "https://github.com/";

pub const SUBMITTED: &str = "Application submitted";
pub const SUBMIT_FAILED: &str = "Failed to submit";

/// Applies to collaborate on a project
///
/// Both a credential and a document are required; when either is missing nothing is sent.
///
/// # Returns
/// - `Ok(())` - Backend accepted the application
/// - `Err(Error::PreconditionError)` - Signed out or no document attached
/// - `Err(Error)` - Any request failure, shown to the user as [`SUBMIT_FAILED`]
pub async fn apply<T: Transport>(
    client: &ApiClient<T>,
    session: &Session,
    project_id: &str,
    message: &str,
    portfolio_url: &str,
    document: Option<Document>,
) -> Result<(), Error> {
    let credential = session.require()?;

    let Some(document) = document else {
        tracing::debug!(project_id, "Blocked application without a document");
        return Err(PreconditionError::DocumentRequired.into());
    };

    client
        .apply(
            &credential,
            project_id,
            ApplicationForm {
                message: message.to_string(),
                portfolio_url: portfolio_url.to_string(),
                document,
            },
        )
        .await?;

    tracing::info!(project_id, "Submitted application");

    Ok(())
}

/// Outcome line shown under the application form
pub fn outcome_text(result: &Result<(), Error>) -> &'static str {
    match result {
        Ok(()) => SUBMITTED,
        Err(_) => SUBMIT_FAILED,
    }
}
