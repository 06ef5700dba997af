//! Declared schema constraints and opt-in checks.
//!
//! The notification schemas state length limits and IRC name grammars, but
//! decoding never enforces them. This module mirrors those declarations so a
//! producer can check a payload before sending it.
//!
//! # Validation Rules
//!
//! - IRC messages: 1 to 510 characters
//! - IRC channels: `#` or `&` followed by 1 to 199 characters other than space,
//!   comma or BEL
//! - IRC users: 1 to 255 characters from the nickname alphabet, not starting
//!   with a digit or hyphen
//! - Email subject: 1 to 255 characters, content: 1 to 102400 characters
//! - Email link: href 1 to 1024 characters, text 1 to 40 characters
//! - Pulse routing key: at most 255 characters

use std::sync::OnceLock;

use regex::Regex;

use crate::error::ConstraintViolation;

/// Pattern declared for IRC channel names.
pub const CHANNEL_PATTERN: &str = r"^[#&][^ ,\x07]{1,199}$";

/// Pattern declared for IRC user names.
pub const USER_PATTERN: &str = r"^[A-Za-z\[\]\\~_^{|}][A-Za-z0-9\-\[\]\\~_^{|}]{0,254}$";

/// Maximum number of characters following a channel prefix.
pub const CHANNEL_NAME_MAX: usize = 199;

/// Maximum length of an IRC user name.
pub const USER_MAX: usize = 255;

/// Minimum length of an IRC message.
pub const IRC_MESSAGE_MIN: usize = 1;

/// Maximum length of an IRC message.
pub const IRC_MESSAGE_MAX: usize = 510;

/// Maximum length of a pulse routing key.
pub const ROUTING_KEY_MAX: usize = 255;

/// Minimum length of an email link target.
pub const LINK_HREF_MIN: usize = 1;

/// Maximum length of an email link target.
pub const LINK_HREF_MAX: usize = 1024;

/// Minimum length of an email link caption.
pub const LINK_TEXT_MIN: usize = 1;

/// Maximum length of an email link caption.
pub const LINK_TEXT_MAX: usize = 40;

/// Minimum length of an email body.
pub const EMAIL_CONTENT_MIN: usize = 1;

/// Maximum length of an email body.
pub const EMAIL_CONTENT_MAX: usize = 102_400;

/// Minimum length of an email subject.
pub const EMAIL_SUBJECT_MIN: usize = 1;

/// Maximum length of an email subject.
pub const EMAIL_SUBJECT_MAX: usize = 255;

/// Checks a payload against the constraints its schema declares.
pub trait Validate {
    /// Returns the first declared constraint the payload violates.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintViolation`] naming the offending field.
    fn validate(&self) -> Result<(), ConstraintViolation>;
}

static CHANNEL_RE: OnceLock<Regex> = OnceLock::new();
static USER_RE: OnceLock<Regex> = OnceLock::new();

fn channel_regex() -> &'static Regex {
    CHANNEL_RE.get_or_init(|| {
        Regex::new(CHANNEL_PATTERN)
            .unwrap_or_else(|error| panic!("channel regex failed to compile: {error}"))
    })
}

fn user_regex() -> &'static Regex {
    USER_RE.get_or_init(|| {
        Regex::new(USER_PATTERN)
            .unwrap_or_else(|error| panic!("user regex failed to compile: {error}"))
    })
}

/// Validates an IRC channel name against [`CHANNEL_PATTERN`].
///
/// # Examples
///
/// ```
/// use notify_schema::is_valid_channel;
///
/// assert!(is_valid_channel("#taskcluster"));
/// assert!(is_valid_channel("&ops"));
/// assert!(!is_valid_channel("taskcluster"));    // Missing prefix
/// assert!(!is_valid_channel("#"));              // Empty name
/// assert!(!is_valid_channel("#a,b"));           // Comma
/// ```
#[must_use]
pub fn is_valid_channel(channel: &str) -> bool {
    channel_regex().is_match(channel)
}

/// Validates an IRC user name against [`USER_PATTERN`].
///
/// # Examples
///
/// ```
/// use notify_schema::is_valid_irc_user;
///
/// assert!(is_valid_irc_user("jonasfj"));
/// assert!(is_valid_irc_user("[bot]|away"));
/// assert!(!is_valid_irc_user("1nick"));         // Leading digit
/// assert!(!is_valid_irc_user("-nick"));         // Leading hyphen
/// assert!(!is_valid_irc_user("has space"));
/// ```
#[must_use]
pub fn is_valid_irc_user(user: &str) -> bool {
    user_regex().is_match(user)
}

/// Checks that `value` holds between `min` and `max` characters.
pub(crate) fn check_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ConstraintViolation> {
    let actual = value.chars().count();
    if actual < min {
        return Err(ConstraintViolation::TooShort { field, min, actual });
    }
    if actual > max {
        return Err(ConstraintViolation::TooLong { field, max, actual });
    }
    Ok(())
}

/// Checks that `value` satisfies `predicate`, reporting `pattern` otherwise.
pub(crate) fn check_pattern(
    field: &'static str,
    value: &str,
    pattern: &'static str,
    predicate: fn(&str) -> bool,
) -> Result<(), ConstraintViolation> {
    if predicate(value) {
        Ok(())
    } else {
        Err(ConstraintViolation::PatternMismatch { field, pattern })
    }
}

#[cfg(test)]
mod tests {
    //! Covers the IRC grammars and the length helper.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("#taskcluster", true)]
    #[case("&local", true)]
    #[case("#a", true)]
    #[case("#émoji-ok", true)]
    #[case("#with\ttab", true)]
    #[case("", false)] // Empty
    #[case("#", false)] // No name
    #[case("taskcluster", false)] // Missing prefix
    #[case("!channel", false)] // Wrong prefix
    #[case("#has space", false)]
    #[case("#has,comma", false)]
    #[case("#bell\x07", false)]
    #[case("#line\nbreak", true)]
    #[case("#trailing\n", true)]
    fn channel_names(#[case] channel: &str, #[case] expected: bool) {
        assert_eq!(is_valid_channel(channel), expected);
    }

    #[test]
    fn accepts_channel_at_exact_max_length() {
        let channel = format!("#{}", "c".repeat(CHANNEL_NAME_MAX));
        assert!(is_valid_channel(&channel));
    }

    #[test]
    fn rejects_channel_exceeding_max_length() {
        let channel = format!("#{}", "c".repeat(CHANNEL_NAME_MAX + 1));
        assert!(!is_valid_channel(&channel));
    }

    #[rstest]
    #[case("a", true)]
    #[case("jonasfj", true)]
    #[case("nick-2", true)]
    #[case("[bot]", true)]
    #[case("\\o/", false)] // Slash
    #[case("{away}|^_~", true)]
    #[case("", false)] // Empty
    #[case("9lives", false)] // Leading digit
    #[case("-dash", false)] // Leading hyphen
    #[case("has space", false)]
    #[case("nïck", false)] // Non-ASCII
    #[case("nick\n", false)] // Trailing newline
    fn irc_user_names(#[case] user: &str, #[case] expected: bool) {
        assert_eq!(is_valid_irc_user(user), expected);
    }

    #[test]
    fn accepts_user_at_exact_max_length() {
        assert!(is_valid_irc_user(&"u".repeat(USER_MAX)));
    }

    #[test]
    fn rejects_user_exceeding_max_length() {
        assert!(!is_valid_irc_user(&"u".repeat(USER_MAX + 1)));
    }

    #[rstest]
    #[case("", Err(ConstraintViolation::TooShort { field: "message", min: 1, actual: 0 }))]
    #[case("ok", Ok(()))]
    #[case("four", Err(ConstraintViolation::TooLong { field: "message", max: 3, actual: 4 }))]
    fn check_length_reports_bounds(
        #[case] value: &str,
        #[case] expected: Result<(), ConstraintViolation>,
    ) {
        assert_eq!(check_length("message", value, 1, 3), expected);
    }

    #[test]
    fn declared_patterns_compile() {
        assert_eq!(channel_regex().as_str(), CHANNEL_PATTERN);
        assert_eq!(user_regex().as_str(), USER_PATTERN);
    }

    #[test]
    fn channel_length_counts_characters_not_bytes() {
        let channel = format!("#{}", "é".repeat(CHANNEL_NAME_MAX));
        assert!(is_valid_channel(&channel));
    }

    #[test]
    fn check_length_counts_characters_not_bytes() {
        // Three characters, six bytes.
        assert_eq!(check_length("text", "äöü", 1, 3), Ok(()));
    }
}
