use dioxus_logger::tracing;

use crate::{
    client::{
        api::{transport::Transport, ApiClient},
        error::Error,
    },
    model::project::ProjectDto,
};

/// Identifies one issued search
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// Hands out monotonically increasing tickets so only the latest search is displayed
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchSequencer {
    latest: u64,
}

impl SearchSequencer {
    pub fn issue(&mut self) -> SearchTicket {
        self.latest += 1;
        SearchTicket(self.latest)
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        ticket.0 == self.latest
    }
}

/// Results shown by the explorer
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectFeed {
    pub projects: Vec<ProjectDto>,
    pub loading: bool,
    pub error: Option<String>,
    sequencer: SearchSequencer,
}

impl ProjectFeed {
    /// Starts a search, superseding any search still in flight
    pub fn begin(&mut self) -> SearchTicket {
        self.loading = true;
        self.sequencer.issue()
    }

    /// Applies a search result if it belongs to the latest search
    ///
    /// Results replace the previous set wholesale. A failed search keeps the previous
    /// results and records an error instead.
    ///
    /// # Returns
    /// - `true` - The result was applied
    /// - `false` - A newer search was issued since; the result was discarded
    pub fn complete(
        &mut self,
        ticket: SearchTicket,
        result: Result<Vec<ProjectDto>, Error>,
    ) -> bool {
        if !self.sequencer.is_current(ticket) {
            tracing::debug!(?ticket, "Discarded stale search results");
            return false;
        }

        self.loading = false;
        match result {
            Ok(projects) => {
                self.projects = projects;
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.user_message("Failed to load projects"));
            }
        }

        true
    }
}

/// Lists projects matching `query`; an empty query lists every project
pub async fn search<T: Transport>(
    client: &ApiClient<T>,
    query: &str,
) -> Result<Vec<ProjectDto>, Error> {
    let projects = client.list_projects(query).await?;

    tracing::debug!(query, count = projects.len(), "Search completed");

    Ok(projects)
}
