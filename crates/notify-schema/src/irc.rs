//! IRC request payloads.
//!
//! An IRC request is one of two shapes: a [`ChannelMessage`] or a
//! [`PrivateMessage`]. The schema does not tag them, so the shape is told
//! apart by which recipient key is present.
//!
//! Two representations are offered:
//!
//! - [`PostIrcMessageRequest`] resolves the shape eagerly and rejects
//!   payloads that carry both recipients or neither.
//! - [`RawIrcMessageRequest`] keeps the payload as verbatim JSON text and
//!   passes it through unchecked. It can be resolved later with
//!   [`RawIrcMessageRequest::resolve`].

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_json::value::RawValue;
use tracing::debug;
use utoipa::ToSchema;

use crate::error::{ConstraintViolation, SchemaError};
use crate::schema_ref::schema_reference;
use crate::validation::{
    CHANNEL_PATTERN, IRC_MESSAGE_MAX, IRC_MESSAGE_MIN, USER_MAX, USER_PATTERN, Validate,
    check_length, check_pattern, is_valid_channel, is_valid_irc_user,
};

const CHANNEL_KEY: &str = "channel";
const USER_KEY: &str = "user";

/// Request to post a message in an IRC channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChannelMessage {
    /// Channel to post the message in.
    #[schema(pattern = r"^[#&][^ ,\x07]{1,199}$", min_length = 1, example = "#taskcluster")]
    pub channel: String,
    /// Message to send as plain text.
    #[schema(min_length = 1, max_length = 510)]
    pub message: String,
}

impl ChannelMessage {
    /// Creates a channel message.
    #[must_use]
    pub fn new(channel: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            message: message.into(),
        }
    }
}

impl Validate for ChannelMessage {
    fn validate(&self) -> Result<(), ConstraintViolation> {
        check_pattern(CHANNEL_KEY, &self.channel, CHANNEL_PATTERN, is_valid_channel)?;
        check_length("message", &self.message, IRC_MESSAGE_MIN, IRC_MESSAGE_MAX)
    }
}

/// Request to post a message to a single IRC user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrivateMessage {
    /// Message to send as plain text.
    #[schema(min_length = 1, max_length = 510)]
    pub message: String,
    /// User to post the message to.
    #[schema(
        pattern = r"^[A-Za-z\[\]\\~_^{|}][A-Za-z0-9\-\[\]\\~_^{|}]{0,254}$",
        min_length = 1,
        max_length = 255,
        example = "jonasfj"
    )]
    pub user: String,
}

impl PrivateMessage {
    /// Creates a private message.
    #[must_use]
    pub fn new(user: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            user: user.into(),
        }
    }
}

impl Validate for PrivateMessage {
    fn validate(&self) -> Result<(), ConstraintViolation> {
        check_length(USER_KEY, &self.user, 1, USER_MAX)?;
        check_pattern(USER_KEY, &self.user, USER_PATTERN, is_valid_irc_user)?;
        check_length("message", &self.message, IRC_MESSAGE_MIN, IRC_MESSAGE_MAX)
    }
}

/// Request to post a message on IRC, resolved to its concrete shape.
///
/// Decoding inspects the payload keys: `channel` selects
/// [`PostIrcMessageRequest::Channel`], `user` selects
/// [`PostIrcMessageRequest::Private`]. Encoding emits the inner record with no
/// tag.
///
/// Through the generic [`crate::decode`] a payload that fails to resolve
/// surfaces as [`SchemaError::Json`]; [`PostIrcMessageRequest::from_slice`]
/// reports the specific resolution error.
///
/// # Example
///
/// ```
/// use notify_schema::{PostIrcMessageRequest, SchemaError};
///
/// let request =
///     PostIrcMessageRequest::from_slice(br##"{"channel": "#ops", "message": "deploy finished"}"##)
///         .expect("decode");
/// assert!(matches!(request, PostIrcMessageRequest::Channel(_)));
/// assert_eq!(request.recipient(), "#ops");
///
/// let both = br##"{"channel": "#ops", "user": "jonasfj", "message": "m"}"##;
/// assert!(matches!(
///     PostIrcMessageRequest::from_slice(both),
///     Err(SchemaError::AmbiguousIrcShape)
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum PostIrcMessageRequest {
    /// Message addressed to a channel.
    Channel(ChannelMessage),
    /// Message addressed to a single user.
    Private(PrivateMessage),
}

impl PostIrcMessageRequest {
    const TYPE_NAME: &'static str = "PostIrcMessageRequest";

    /// Decodes JSON bytes and resolves them into one of the two request
    /// shapes.
    ///
    /// Unlike the generic [`crate::decode`], resolution failures keep their
    /// own [`SchemaError`] variant instead of arriving as a codec error.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Json`] when `bytes` is not valid JSON, and
    /// otherwise the same errors as [`PostIrcMessageRequest::from_value`].
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SchemaError> {
        let value: Value = serde_json::from_slice(bytes).map_err(|err| {
            debug!(type_name = Self::TYPE_NAME, error = %err, "payload decode failed");
            SchemaError::from(err)
        })?;
        Self::from_value(value).inspect_err(|err| {
            debug!(error = %err, "IRC request shape could not be resolved");
        })
    }

    /// Resolves a decoded JSON value into one of the two request shapes.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::IrcPayloadNotObject`] for non-objects,
    /// [`SchemaError::AmbiguousIrcShape`] when both recipient keys are
    /// present, [`SchemaError::MissingIrcRecipient`] when neither is, and
    /// [`SchemaError::Json`] when the selected shape fails to decode.
    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        let (has_channel, has_user) = match &value {
            Value::Object(fields) => (
                fields.contains_key(CHANNEL_KEY),
                fields.contains_key(USER_KEY),
            ),
            _ => return Err(SchemaError::IrcPayloadNotObject),
        };
        match (has_channel, has_user) {
            (true, false) => Ok(Self::Channel(serde_json::from_value(value)?)),
            (false, true) => Ok(Self::Private(serde_json::from_value(value)?)),
            (true, true) => Err(SchemaError::AmbiguousIrcShape),
            (false, false) => Err(SchemaError::MissingIrcRecipient),
        }
    }

    /// Converts the request into a verbatim raw payload.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Json`] if serialization fails.
    pub fn to_raw(&self) -> Result<RawIrcMessageRequest, SchemaError> {
        let raw = serde_json::value::to_raw_value(self)?;
        Ok(RawIrcMessageRequest(raw))
    }

    /// Returns the channel or user the message is addressed to.
    #[must_use]
    pub fn recipient(&self) -> &str {
        match self {
            Self::Channel(message) => &message.channel,
            Self::Private(message) => &message.user,
        }
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Channel(message) => &message.message,
            Self::Private(message) => &message.message,
        }
    }
}

impl From<ChannelMessage> for PostIrcMessageRequest {
    fn from(message: ChannelMessage) -> Self {
        Self::Channel(message)
    }
}

impl From<PrivateMessage> for PostIrcMessageRequest {
    fn from(message: PrivateMessage) -> Self {
        Self::Private(message)
    }
}

impl<'de> Deserialize<'de> for PostIrcMessageRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(|err| {
            debug!(error = %err, "IRC request shape could not be resolved");
            D::Error::custom(err)
        })
    }
}

impl Validate for PostIrcMessageRequest {
    fn validate(&self) -> Result<(), ConstraintViolation> {
        match self {
            Self::Channel(message) => message.validate(),
            Self::Private(message) => message.validate(),
        }
    }
}

/// Request to post a message on IRC, held as verbatim JSON.
///
/// The payload is stored exactly as received and emitted exactly as stored.
/// Neither one-of branch is checked, so shapes matching neither
/// [`ChannelMessage`] nor [`PrivateMessage`] pass through untouched.
/// Whitespace surrounding the top-level value is not retained.
///
/// # Example
///
/// ```
/// use notify_schema::RawIrcMessageRequest;
///
/// let bytes = br#"{"user":"jonasfj",  "message":"ping"}"#;
/// let mut request = RawIrcMessageRequest::default();
/// RawIrcMessageRequest::decode_into(Some(&mut request), bytes).expect("decode");
///
/// assert_eq!(request.encode(), bytes.to_vec());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawIrcMessageRequest(Box<RawValue>);

impl RawIrcMessageRequest {
    const TYPE_NAME: &'static str = "RawIrcMessageRequest";

    /// Captures a JSON document verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Json`] if `bytes` is not syntactically valid
    /// JSON.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SchemaError> {
        let raw = serde_json::from_slice::<Box<RawValue>>(bytes).map_err(|err| {
            debug!(type_name = Self::TYPE_NAME, error = %err, "payload decode failed");
            SchemaError::from(err)
        })?;
        Ok(Self(raw))
    }

    /// Decodes `bytes` into `target`, replacing its previous payload.
    ///
    /// The target is left untouched when decoding fails.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidTarget`] when `target` is `None`, and
    /// [`SchemaError::Json`] when `bytes` is not syntactically valid JSON.
    pub fn decode_into(target: Option<&mut Self>, bytes: &[u8]) -> Result<(), SchemaError> {
        let Some(slot) = target else {
            debug!(type_name = Self::TYPE_NAME, "decode into absent target rejected");
            return Err(SchemaError::InvalidTarget {
                type_name: Self::TYPE_NAME,
            });
        };
        *slot = Self::from_slice(bytes)?;
        Ok(())
    }

    /// Returns the stored payload as JSON text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.get()
    }

    /// Returns the stored payload bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.get().as_bytes()
    }

    /// Encodes the payload by copying the stored bytes.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Resolves the stored payload into a [`PostIrcMessageRequest`].
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`PostIrcMessageRequest::from_value`].
    pub fn resolve(&self) -> Result<PostIrcMessageRequest, SchemaError> {
        let value: Value = serde_json::from_str(self.0.get())?;
        PostIrcMessageRequest::from_value(value).inspect_err(|err| {
            debug!(error = %err, "raw IRC request did not resolve");
        })
    }
}

impl Default for RawIrcMessageRequest {
    fn default() -> Self {
        Self(RawValue::NULL.to_owned())
    }
}

impl PartialEq for RawIrcMessageRequest {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for RawIrcMessageRequest {}

schema_reference!(ChannelMessage, "irc-request.json#/oneOf[0]");
schema_reference!(PrivateMessage, "irc-request.json#/oneOf[1]");
schema_reference!(PostIrcMessageRequest, "irc-request.json#");
schema_reference!(RawIrcMessageRequest, "irc-request.json#");
