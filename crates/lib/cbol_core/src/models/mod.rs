//! Domain models shared by the API client and the views.

pub mod auth;
pub mod user;

use serde::{Deserialize, Deserializer};

/// Deserialize a possibly-null string field as an empty string.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Deserialize a display value as text: strings as-is, `null` as empty,
/// anything else rendered as JSON.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_opt_text(deserializer).map(Option::unwrap_or_default)
}

/// Like [`lenient_text`], but `null` stays `None`.
pub(crate) fn lenient_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => None,
        serde_json::Value::String(text) => Some(text),
        other => Some(other.to_string()),
    })
}
