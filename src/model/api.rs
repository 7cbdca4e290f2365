use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The body returned by the backend when a request fails
///
/// The backend reports failures as `{"detail": ...}` where `detail` is usually a
/// human readable string but may be a list of validation errors.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ErrorDto {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorDto {
    /// Returns the detail message when the backend sent it as plain text
    pub fn message(&self) -> Option<&str> {
        match &self.detail {
            Some(Value::String(message)) if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Integer(i64),
}

/// Accepts identifiers sent either as JSON strings or integers
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Integer(id) => id.to_string(),
    })
}

/// Treats an explicit `null` like a missing field, falling back to the default value
pub(crate) fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
