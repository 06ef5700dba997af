//! Serde helpers for optional string fields.
//!
//! Optional strings in the notification schemas are omitted from the wire
//! when absent or empty, and an empty string on the wire decodes as absent.

use serde::{Deserialize, Deserializer};

/// Returns `true` when an optional string should be left off the wire.
pub(crate) fn is_absent(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

/// Decodes an optional string, treating `""` and `null` as absent.
pub(crate) fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|text| !text.is_empty()))
}
