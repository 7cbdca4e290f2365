use dioxus_logger::tracing;

use crate::{
    client::{
        api::{transport::Transport, ApiClient},
        error::Error,
        session::Session,
    },
    model::application::{ApplicationRequestDto, ApplicationStatus},
};

/// A project owner's verdict on an application
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Reject,
}

impl Decision {
    pub fn status(self) -> ApplicationStatus {
        match self {
            Self::Accept => ApplicationStatus::Accepted,
            Self::Reject => ApplicationStatus::Rejected,
        }
    }
}

/// Result of [`set_status`]: the update and the reload that always follows it
#[derive(Debug)]
pub struct StatusChange {
    pub update: Result<(), Error>,
    pub applicants: Result<Option<Vec<ApplicationRequestDto>>, Error>,
}

impl StatusChange {
    pub fn status_text(&self) -> &'static str {
        match self.update {
            Ok(()) => "Updated",
            Err(_) => "Update failed",
        }
    }
}

/// Lists the applicants of a project
///
/// Ownership is enforced by the backend, any project ID is sent as given.
///
/// # Returns
/// - `Ok(None)` - Project ID is blank, nothing was sent
/// - `Ok(Some(applicants))` - The full applicant list
/// - `Err(Error)` - Signed out or the request failed
pub async fn load_applicants<T: Transport>(
    client: &ApiClient<T>,
    session: &Session,
    project_id: &str,
) -> Result<Option<Vec<ApplicationRequestDto>>, Error> {
    let project_id = project_id.trim();
    if project_id.is_empty() {
        return Ok(None);
    }

    let credential = session.require()?;

    Ok(Some(client.list_applicants(&credential, project_id).await?))
}

/// Updates an application's status, then reloads the applicant list regardless of outcome
pub async fn set_status<T: Transport>(
    client: &ApiClient<T>,
    session: &Session,
    project_id: &str,
    request_id: &str,
    decision: Decision,
) -> StatusChange {
    let update = match session.require() {
        Ok(credential) => {
            client
                .update_status(&credential, request_id, decision.status())
                .await
        }
        Err(err) => Err(err),
    };

    if let Err(err) = &update {
        tracing::warn!(request_id, "Failed to update application status: {}", err);
    }

    let applicants = load_applicants(client, session, project_id).await;

    StatusChange { update, applicants }
}
