//! JSON encode and decode for every payload type.
//!
//! These wrap `serde_json` so failures carry a [`SchemaError`] and emit a
//! `debug` event naming the payload type.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::SchemaError;

/// Encodes a payload as compact JSON bytes.
///
/// Keys follow the wire names and absent optional fields are omitted.
///
/// # Errors
///
/// Returns [`SchemaError::Json`] if the value cannot be serialized.
pub fn encode<T>(value: &T) -> Result<Vec<u8>, SchemaError>
where
    T: Serialize + ?Sized,
{
    serde_json::to_vec(value).map_err(|err| {
        debug!(
            type_name = std::any::type_name::<T>(),
            error = %err,
            "payload encode failed"
        );
        SchemaError::from(err)
    })
}

/// Decodes a payload from JSON bytes.
///
/// Unknown keys are ignored. Declared constraints are not checked; see
/// [`crate::Validate`].
///
/// # Errors
///
/// Returns [`SchemaError::Json`] for malformed JSON or a shape mismatch.
pub fn decode<T>(bytes: &[u8]) -> Result<T, SchemaError>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(bytes).map_err(|err| {
        debug!(
            type_name = std::any::type_name::<T>(),
            error = %err,
            "payload decode failed"
        );
        SchemaError::from(err)
    })
}
