//! Pulse message payloads.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::value::RawValue;
use utoipa::ToSchema;

use crate::error::{ConstraintViolation, SchemaError};
use crate::schema_ref::schema_reference;
use crate::validation::{ROUTING_KEY_MAX, Validate, check_length};

/// Body of a pulse message, held as verbatim JSON.
///
/// The body is opaque to this crate. It is stored exactly as received and
/// emitted exactly as stored, so number formatting, key order and properties
/// no schema names all survive a decode and re-encode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PulseMessage(Box<RawValue>);

impl PulseMessage {
    /// Serializes `body` into a message.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Json`] if `body` cannot be serialized.
    pub fn from_value<T: Serialize + ?Sized>(body: &T) -> Result<Self, SchemaError> {
        Ok(Self(serde_json::value::to_raw_value(body)?))
    }

    /// Captures JSON text verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Json`] if `json` is not a single valid JSON
    /// value.
    pub fn from_json(json: impl Into<String>) -> Result<Self, SchemaError> {
        Ok(Self(RawValue::from_string(json.into())?))
    }

    /// Returns the body as JSON text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.get()
    }

    /// Parses the body into a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Json`] if the body cannot be parsed.
    pub fn to_value(&self) -> Result<Value, SchemaError> {
        self.parse()
    }

    /// Parses the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Json`] if the body does not match `T`.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, SchemaError> {
        Ok(serde_json::from_str(self.0.get())?)
    }
}

impl PartialEq for PulseMessage {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for PulseMessage {}

/// Request to publish a message on pulse.
///
/// # Example
///
/// ```
/// use notify_schema::{PostPulseMessageRequest, decode, encode};
///
/// let bytes = br#"{"message":{"b":1e2,"a":{"nested":true}},"routingKey":"project.build"}"#;
/// let request: PostPulseMessageRequest = decode(bytes).expect("decode");
///
/// assert_eq!(request.routing_key, "project.build");
/// assert_eq!(request.message.as_str(), r#"{"b":1e2,"a":{"nested":true}}"#);
/// assert_eq!(encode(&request).expect("encode"), bytes.to_vec());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostPulseMessageRequest {
    /// Message body to publish; additional properties are allowed.
    #[schema(value_type = Object)]
    pub message: PulseMessage,
    /// Routing key used when publishing the message.
    #[schema(max_length = 255, example = "project.taskcluster.builds")]
    pub routing_key: String,
}

impl PostPulseMessageRequest {
    /// Creates a pulse request.
    #[must_use]
    pub fn new(routing_key: impl Into<String>, message: PulseMessage) -> Self {
        Self {
            message,
            routing_key: routing_key.into(),
        }
    }
}

impl Validate for PostPulseMessageRequest {
    fn validate(&self) -> Result<(), ConstraintViolation> {
        check_length("routingKey", &self.routing_key, 0, ROUTING_KEY_MAX)
    }
}

schema_reference!(PulseMessage, "pulse-request.json#/properties/message");
schema_reference!(PostPulseMessageRequest, "pulse-request.json#");
