use std::collections::HashSet;

use dioxus_logger::tracing;

use crate::{
    client::{
        api::{transport::Transport, ApiClient},
        error::Error,
        session::Session,
    },
    model::project::{NewProjectDto, ProjectDto, Visibility},
};

/// Splits comma separated input into trimmed, non-empty entries in their original order
pub fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Drops repeated entries, keeping the first occurrence of each in order
pub fn distinct(entries: &[String]) -> Vec<&str> {
    let mut seen = HashSet::new();

    entries
        .iter()
        .map(String::as_str)
        .filter(|entry| seen.insert(*entry))
        .collect()
}

/// Raw values of the project composer form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub skills: String,
    pub duration: String,
    pub tags: String,
    pub visibility: Visibility,
}

impl ProjectDraft {
    pub fn to_new_project(&self) -> NewProjectDto {
        NewProjectDto {
            title: self.title.clone(),
            description: self.description.clone(),
            skills_required: split_csv(&self.skills),
            duration: self.duration.clone(),
            tags: split_csv(&self.tags),
            visibility: self.visibility,
        }
    }
}

/// Publishes a project posting
///
/// No validation happens beyond splitting skills and tags; the backend decides which
/// fields are required.
///
/// # Returns
/// - `Ok(ProjectDto)` - The project as created by the backend
/// - `Err(Error::PreconditionError)` - Signed out, nothing was sent
/// - `Err(Error::RequestFailed)` - Backend rejected the project
pub async fn publish<T: Transport>(
    client: &ApiClient<T>,
    session: &Session,
    draft: &ProjectDraft,
) -> Result<ProjectDto, Error> {
    let credential = session.require()?;

    let project = client
        .create_project(&credential, &draft.to_new_project())
        .await?;

    tracing::info!(project_id = %project.id, "Published project");

    Ok(project)
}

/// Saves a project to the signed in user's list
///
/// # Returns
/// - `Ok(())` - Backend confirmed the save
/// - `Err(Error::PreconditionError)` - Signed out, nothing was sent
/// - `Err(Error::RequestFailed)` - Backend rejected the save
pub async fn save<T: Transport>(
    client: &ApiClient<T>,
    session: &Session,
    project_id: &str,
) -> Result<(), Error> {
    let credential = session.require()?;

    client.save_project(&credential, project_id).await
}
