//! OpenAPI component descriptions for the notification payloads.
//!
//! This module defines [`NotifySchemasDoc`], an OpenAPI document that
//! registers every payload type as a component schema, carrying the declared
//! length and pattern constraints. An API description can merge it in, and
//! tooling can diff it against the published JSON Schemas.

use serde_json::Value;
use utoipa::OpenApi;
use utoipa::openapi::schema::{ObjectBuilder, Type};
use utoipa::openapi::{RefOr, Schema};

use crate::{
    ChannelMessage, DenylistQuery, EmailTemplate, Link, ListOfNotificationAddresses,
    NotificationType, NotificationTypeAndAddress, PostIrcMessageRequest,
    PostPulseMessageRequest, PrivateMessage, SendEmailRequest,
};

/// Builds a string schema restricted to `values`.
pub(crate) fn string_enum_schema(
    values: &[&'static str],
    default: Option<&'static str>,
) -> RefOr<Schema> {
    let schema = ObjectBuilder::new()
        .schema_type(Type::String)
        .enum_values(Some(values.iter().copied()))
        .default(default.map(Value::from))
        .build();
    RefOr::T(Schema::Object(schema))
}

/// OpenAPI document listing the notification payload schemas.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Notification payloads",
        description = "Request and response bodies for email, IRC and pulse notifications."
    ),
    components(schemas(
        ChannelMessage,
        PrivateMessage,
        PostIrcMessageRequest,
        PostPulseMessageRequest,
        Link,
        EmailTemplate,
        SendEmailRequest,
        NotificationType,
        NotificationTypeAndAddress,
        ListOfNotificationAddresses,
        DenylistQuery,
    ))
)]
pub struct NotifySchemasDoc;

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use utoipa::openapi::schema::Object;
    use utoipa::{PartialSchema, ToSchema};

    use super::*;
    use crate::validation::{CHANNEL_PATTERN, USER_PATTERN};

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    fn property<'a>(object: &'a Object, name: &str) -> &'a Object {
        match object.properties.get(name) {
            Some(RefOr::T(Schema::Object(property))) => property,
            other => panic!("expected inline object schema for {name}, got {other:?}"),
        }
    }

    fn object_schema<T: PartialSchema>() -> Object {
        match T::schema() {
            RefOr::T(Schema::Object(object)) => object,
            other => panic!("expected object schema, got {other:?}"),
        }
    }

    #[rstest]
    #[case("ChannelMessage")]
    #[case("PrivateMessage")]
    #[case("PostIrcMessageRequest")]
    #[case("PostPulseMessageRequest")]
    #[case("Link")]
    #[case("EmailTemplate")]
    #[case("SendEmailRequest")]
    #[case("NotificationType")]
    #[case("NotificationTypeAndAddress")]
    #[case("ListOfNotificationAddresses")]
    #[case("DenylistQuery")]
    fn document_registers_component(#[case] name: &str) {
        let doc = NotifySchemasDoc::openapi();
        let components = doc.components.expect("components present");
        assert!(
            components.schemas.contains_key(name),
            "missing component {name}"
        );
    }

    #[test]
    fn channel_schema_carries_declared_pattern() {
        let object = object_schema::<ChannelMessage>();
        let channel = property(&object, "channel");
        assert_eq!(channel.pattern.as_deref(), Some(CHANNEL_PATTERN));
        let message = property(&object, "message");
        assert_eq!((message.min_length, message.max_length), (Some(1), Some(510)));
    }

    #[test]
    fn user_schema_carries_declared_pattern() {
        let object = object_schema::<PrivateMessage>();
        let user = property(&object, "user");
        assert_eq!(user.pattern.as_deref(), Some(USER_PATTERN));
        assert_eq!(user.max_length, Some(255));
    }

    #[test]
    fn email_schema_uses_wire_names() {
        let schema_json = schema_to_json::<SendEmailRequest>();
        assert!(schema_json.contains("replyTo"), "schema should use camelCase");
        assert_eq!(SendEmailRequest::name(), "SendEmailRequest");
    }

    #[test]
    fn irc_request_schema_is_one_of() {
        let schema_json = schema_to_json::<PostIrcMessageRequest>();
        assert!(schema_json.contains("oneOf"), "untagged enum renders as oneOf");
    }

    #[rstest]
    #[case(schema_to_json::<NotificationType>(), &["email", "pulse", "irc-user", "irc-channel"])]
    #[case(schema_to_json::<EmailTemplate>(), &["simple", "fullscreen"])]
    fn string_enums_list_declared_values(#[case] schema_json: String, #[case] values: &[&str]) {
        for value in values {
            assert!(
                schema_json.contains(&format!("\"{value}\"")),
                "missing enum value {value}"
            );
        }
    }
}
