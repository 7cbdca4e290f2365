use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use serde_json::Value;

use crate::model::api::{deserialize_id, deserialize_nullable};

/// Who can discover a project posting
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

/// A project posting as listed by the backend
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectDto {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub skills_required: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub duration: String,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub visibility: Visibility,
    /// Creation time in UTC, when the backend provides one
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<NaiveDateTime>,
}

/// Payload for publishing a new project
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProjectDto {
    pub title: String,
    pub description: String,
    pub skills_required: Vec<String>,
    pub duration: String,
    pub tags: Vec<String>,
    pub visibility: Visibility,
}

// Timestamps arrive either as RFC 3339 or as naive ISO 8601 strings; any other value,
// including numbers, is dropped rather than failing the whole listing.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::String(raw) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };

    if let Ok(datetime) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(datetime.naive_utc()));
    }

    Ok(raw.parse::<NaiveDateTime>().ok())
}
