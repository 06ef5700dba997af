//! Email request payloads.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::openapi::{RefOr, Schema};
use utoipa::{PartialSchema, ToSchema};

use crate::error::ConstraintViolation;
use crate::openapi::string_enum_schema;
use crate::schema_ref::schema_reference;
use crate::validation::{
    EMAIL_CONTENT_MAX, EMAIL_CONTENT_MIN, EMAIL_SUBJECT_MAX, EMAIL_SUBJECT_MIN, LINK_HREF_MAX,
    LINK_HREF_MIN, LINK_TEXT_MAX, LINK_TEXT_MIN, Validate, check_length,
};

/// Optional link rendered as a button in the email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// Where the link should point to.
    #[schema(min_length = 1, max_length = 1024, example = "https://tools.taskcluster.net")]
    pub href: String,
    /// Text to display on the link.
    #[schema(min_length = 1, max_length = 40, example = "Inspect task")]
    pub text: String,
}

impl Link {
    /// Creates a link.
    #[must_use]
    pub fn new(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            text: text.into(),
        }
    }
}

impl Validate for Link {
    fn validate(&self) -> Result<(), ConstraintViolation> {
        check_length("href", &self.href, LINK_HREF_MIN, LINK_HREF_MAX)?;
        check_length("text", &self.text, LINK_TEXT_MIN, LINK_TEXT_MAX)
    }
}

/// HTML template used to format an email.
///
/// Values outside the declared set are kept verbatim in
/// [`EmailTemplate::Unknown`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EmailTemplate {
    /// The default single-column layout.
    #[default]
    Simple,
    /// A layout that uses the full width of the window.
    Fullscreen,
    /// A template name the schema does not declare.
    Unknown(String),
}

impl EmailTemplate {
    /// Returns the wire name of the template.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Simple => "simple",
            Self::Fullscreen => "fullscreen",
            Self::Unknown(name) => name,
        }
    }
}

impl From<String> for EmailTemplate {
    fn from(name: String) -> Self {
        match name.as_str() {
            "simple" => Self::Simple,
            "fullscreen" => Self::Fullscreen,
            _ => Self::Unknown(name),
        }
    }
}

impl From<EmailTemplate> for String {
    fn from(template: EmailTemplate) -> Self {
        match template {
            EmailTemplate::Unknown(name) => name,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for EmailTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialSchema for EmailTemplate {
    fn schema() -> RefOr<Schema> {
        string_enum_schema(&["simple", "fullscreen"], Some("simple"))
    }
}

impl ToSchema for EmailTemplate {
    fn name() -> Cow<'static, str> {
        Cow::Borrowed("EmailTemplate")
    }
}

/// Request to send an email.
///
/// # Example
///
/// ```
/// use notify_schema::{EmailTemplate, Link, SendEmailRequest, encode};
///
/// let request = SendEmailRequest::new("dev@example.com", "Build failed", "See **logs**.")
///     .with_link(Link::new("https://example.com/task/1", "Inspect task"))
///     .with_template(EmailTemplate::Fullscreen);
///
/// let json = String::from_utf8(encode(&request).expect("encode")).expect("utf-8");
/// assert!(json.contains(r#""template":"fullscreen""#));
/// assert!(!json.contains("replyTo"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailRequest {
    /// Address the message is sent to.
    #[schema(example = "dev@example.com")]
    pub address: String,
    /// Body of the email as markdown, rendered to HTML before sending.
    #[schema(min_length = 1, max_length = 102_400)]
    pub content: String,
    /// Optional button linking elsewhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
    /// Optional reply-to address.
    #[serde(
        default,
        skip_serializing_if = "crate::serde_support::is_absent",
        deserialize_with = "crate::serde_support::empty_as_none"
    )]
    pub reply_to: Option<String>,
    /// Plain-text subject line.
    #[schema(min_length = 1, max_length = 255)]
    pub subject: String,
    /// Template used to format the content; `simple` when absent.
    #[serde(
        default,
        skip_serializing_if = "template_is_absent",
        deserialize_with = "empty_template_as_none"
    )]
    pub template: Option<EmailTemplate>,
}

impl SendEmailRequest {
    /// Creates a request with no link, reply-to or template.
    #[must_use]
    pub fn new(
        address: impl Into<String>,
        subject: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            content: content.into(),
            link: None,
            reply_to: None,
            subject: subject.into(),
            template: None,
        }
    }

    /// Attaches a link button.
    #[must_use]
    pub fn with_link(mut self, link: Link) -> Self {
        self.link = Some(link);
        self
    }

    /// Sets the reply-to address. An empty address clears it.
    #[must_use]
    pub fn with_reply_to(mut self, reply_to: impl Into<String>) -> Self {
        self.reply_to = Some(reply_to.into()).filter(|address| !address.is_empty());
        self
    }

    /// Selects the template. An empty template name clears it.
    #[must_use]
    pub fn with_template(mut self, template: EmailTemplate) -> Self {
        self.template = Some(template).filter(|name| !name.as_str().is_empty());
        self
    }

    /// Returns the template that applies, falling back to the default.
    #[must_use]
    pub fn effective_template(&self) -> EmailTemplate {
        self.template.clone().unwrap_or_default()
    }
}

impl Validate for SendEmailRequest {
    fn validate(&self) -> Result<(), ConstraintViolation> {
        check_length("subject", &self.subject, EMAIL_SUBJECT_MIN, EMAIL_SUBJECT_MAX)?;
        check_length("content", &self.content, EMAIL_CONTENT_MIN, EMAIL_CONTENT_MAX)?;
        self.link.as_ref().map_or(Ok(()), Link::validate)
    }
}

fn template_is_absent(template: &Option<EmailTemplate>) -> bool {
    template
        .as_ref()
        .is_none_or(|name| name.as_str().is_empty())
}

fn empty_template_as_none<'de, D>(deserializer: D) -> Result<Option<EmailTemplate>, D::Error>
where
    D: Deserializer<'de>,
{
    let template = Option::<EmailTemplate>::deserialize(deserializer)?;
    Ok(template.filter(|name| !name.as_str().is_empty()))
}

schema_reference!(Link, "email-request.json#/properties/link");
schema_reference!(SendEmailRequest, "email-request.json#");
