use serde::{Deserialize, Serialize};

use crate::model::api::{deserialize_id, deserialize_nullable};

/// Review state of an application
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

/// A collaborator's request to join a project, as seen by the project owner
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRequestDto {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub message: String,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub portfolio_url: String,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub status: ApplicationStatus,
}

/// Body of the owner status update endpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdateDto {
    pub status: ApplicationStatus,
}
