//! Notification addresses and the paginated denylist listing.
//!
//! The listing is returned a page at a time. A page carrying a continuation
//! token has more results behind it, fetched by echoing the token back in a
//! [`DenylistQuery`].

use std::borrow::Cow;
use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use utoipa::openapi::{RefOr, Schema};
use utoipa::{PartialSchema, ToSchema};

use crate::openapi::string_enum_schema;
use crate::schema_ref::schema_reference;

/// Channel a notification is delivered through.
///
/// Values outside the declared set are kept verbatim in
/// [`NotificationType::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NotificationType {
    /// Email delivery.
    Email,
    /// Pulse message-bus delivery.
    Pulse,
    /// IRC private message.
    IrcUser,
    /// IRC channel message.
    IrcChannel,
    /// A notification type the schema does not declare.
    Unknown(String),
}

impl NotificationType {
    /// Returns the wire name of the notification type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Email => "email",
            Self::Pulse => "pulse",
            Self::IrcUser => "irc-user",
            Self::IrcChannel => "irc-channel",
            Self::Unknown(name) => name,
        }
    }
}

impl From<String> for NotificationType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "email" => Self::Email,
            "pulse" => Self::Pulse,
            "irc-user" => Self::IrcUser,
            "irc-channel" => Self::IrcChannel,
            _ => Self::Unknown(name),
        }
    }
}

impl From<NotificationType> for String {
    fn from(kind: NotificationType) -> Self {
        match kind {
            NotificationType::Unknown(name) => name,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialSchema for NotificationType {
    fn schema() -> RefOr<Schema> {
        string_enum_schema(&["email", "pulse", "irc-user", "irc-channel"], None)
    }
}

impl ToSchema for NotificationType {
    fn name() -> Cow<'static, str> {
        Cow::Borrowed("NotificationType")
    }
}

/// Type of notification and its corresponding address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationTypeAndAddress {
    /// Address in the form the notification type expects.
    #[schema(example = "#taskcluster")]
    pub notification_address: String,
    /// Delivery channel of the address.
    pub notification_type: NotificationType,
}

impl NotificationTypeAndAddress {
    /// Creates an address entry.
    #[must_use]
    pub fn new(notification_type: NotificationType, address: impl Into<String>) -> Self {
        Self {
            notification_address: address.into(),
            notification_type,
        }
    }
}

/// One page of notification addresses.
///
/// # Example
///
/// ```
/// use std::num::NonZeroU32;
///
/// use notify_schema::{ListOfNotificationAddresses, decode};
///
/// let page: ListOfNotificationAddresses =
///     decode(br#"{"addresses":[],"continuationToken":"abc"}"#).expect("decode");
///
/// assert!(page.addresses.is_empty());
/// let next = page.next_page(NonZeroU32::new(100)).expect("more results");
/// assert_eq!(next.continuation_token.as_deref(), Some("abc"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListOfNotificationAddresses {
    /// Addresses on this page, in listing order.
    #[serde(default)]
    pub addresses: Vec<NotificationTypeAndAddress>,
    /// Opaque cursor for the next page; absent on the last page.
    #[serde(
        default,
        skip_serializing_if = "crate::serde_support::is_absent",
        deserialize_with = "crate::serde_support::empty_as_none"
    )]
    pub continuation_token: Option<String>,
}

impl ListOfNotificationAddresses {
    /// Returns `true` when no further pages follow this one.
    #[must_use]
    pub fn is_last_page(&self) -> bool {
        crate::serde_support::is_absent(&self.continuation_token)
    }

    /// Returns the query that fetches the following page, if any.
    #[must_use]
    pub fn next_page(&self, limit: Option<NonZeroU32>) -> Option<DenylistQuery> {
        if self.is_last_page() {
            return None;
        }
        Some(DenylistQuery {
            continuation_token: self.continuation_token.clone(),
            limit,
        })
    }
}

/// Query parameters for listing the notification denylist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DenylistQuery {
    /// Token from the previous page; absent for the first page.
    #[serde(
        default,
        skip_serializing_if = "crate::serde_support::is_absent",
        deserialize_with = "crate::serde_support::empty_as_none"
    )]
    pub continuation_token: Option<String>,
    /// Maximum number of addresses to return.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = u32, minimum = 1)]
    pub limit: Option<NonZeroU32>,
}

impl DenylistQuery {
    /// Returns the query for the first page.
    #[must_use]
    pub const fn first_page(limit: Option<NonZeroU32>) -> Self {
        Self {
            continuation_token: None,
            limit,
        }
    }

    /// Renders the query as URL query pairs, omitting absent parameters.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(token) = self.continuation_token.as_deref().filter(|t| !t.is_empty()) {
            pairs.push(("continuationToken", token.to_owned()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

schema_reference!(NotificationTypeAndAddress, "notification-address.json#");
schema_reference!(ListOfNotificationAddresses, "notification-address-list.json#");
