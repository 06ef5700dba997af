//! Wire payload types for the notification API.
//!
//! This crate describes the JSON bodies exchanged with the notification
//! service: emails, IRC messages, pulse messages and the paginated denylist
//! of notification addresses. It performs no transport; an API client sends
//! and receives the bytes these types encode and decode.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Encoding and decoding every payload with camelCase wire names
//! - Resolving the untagged IRC one-of by its recipient key
//! - Verbatim passthrough of raw IRC payloads
//! - Opt-in checks of the declared length and pattern constraints
//! - OpenAPI component schemas mirroring the published JSON Schemas
//!
//! # Example
//!
//! ```
//! use notify_schema::{PostIrcMessageRequest, PrivateMessage, Validate, decode, encode};
//!
//! let request = PostIrcMessageRequest::from(PrivateMessage::new("jonasfj", "task done"));
//! request.validate().expect("within declared limits");
//!
//! let bytes = encode(&request).expect("encode");
//! let decoded: PostIrcMessageRequest = decode(&bytes).expect("decode");
//!
//! assert_eq!(decoded, request);
//! ```

mod addresses;
mod codec;
mod email;
mod error;
mod irc;
pub mod openapi;
mod pulse;
mod schema_ref;
mod serde_support;
mod validation;

pub use addresses::{
    DenylistQuery, ListOfNotificationAddresses, NotificationType, NotificationTypeAndAddress,
};
pub use codec::{decode, encode};
pub use email::{EmailTemplate, Link, SendEmailRequest};
pub use error::{ConstraintViolation, SchemaError};
pub use irc::{ChannelMessage, PostIrcMessageRequest, PrivateMessage, RawIrcMessageRequest};
pub use pulse::{PostPulseMessageRequest, PulseMessage};
pub use schema_ref::{SCHEMA_BASE, SchemaReference};
pub use validation::{
    CHANNEL_NAME_MAX, CHANNEL_PATTERN, EMAIL_CONTENT_MAX, EMAIL_SUBJECT_MAX, IRC_MESSAGE_MAX,
    LINK_HREF_MAX, LINK_TEXT_MAX, ROUTING_KEY_MAX, USER_PATTERN, Validate, is_valid_channel,
    is_valid_irc_user,
};
