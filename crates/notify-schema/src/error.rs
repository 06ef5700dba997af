//! Error types for the notify-schema crate.
//!
//! Decoding failures and one-of resolution failures share [`SchemaError`].
//! Declared schema constraints are checked separately and reported as
//! [`ConstraintViolation`], since decoding never enforces them.

use thiserror::Error;

/// Errors raised while encoding, decoding or resolving payloads.
///
/// Codec failures are passed through from `serde_json` unchanged, so malformed
/// syntax and type mismatches are not told apart here.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A decode was attempted into an absent destination.
    #[error("{type_name}: cannot decode into an absent target")]
    InvalidTarget {
        /// Name of the payload type that was being decoded.
        type_name: &'static str,
    },

    /// An IRC request carries both `channel` and `user`.
    #[error("IRC request is ambiguous: both `channel` and `user` are present")]
    AmbiguousIrcShape,

    /// An IRC request carries neither `channel` nor `user`.
    #[error("IRC request names no recipient: expected `channel` or `user`")]
    MissingIrcRecipient,

    /// An IRC request is not a JSON object.
    #[error("IRC request must be a JSON object")]
    IrcPayloadNotObject,

    /// The underlying JSON codec rejected the input or value.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// A declared schema constraint that a payload field does not meet.
///
/// Lengths are counted in Unicode scalar values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintViolation {
    /// The field is shorter than its declared minimum length.
    #[error("`{field}` is too short: {actual} characters, minimum {min}")]
    TooShort {
        /// Wire name of the field.
        field: &'static str,
        /// Declared minimum length.
        min: usize,
        /// Observed length.
        actual: usize,
    },

    /// The field is longer than its declared maximum length.
    #[error("`{field}` is too long: {actual} characters, maximum {max}")]
    TooLong {
        /// Wire name of the field.
        field: &'static str,
        /// Declared maximum length.
        max: usize,
        /// Observed length.
        actual: usize,
    },

    /// The field does not match its declared pattern.
    #[error("`{field}` does not match pattern {pattern}")]
    PatternMismatch {
        /// Wire name of the field.
        field: &'static str,
        /// The declared pattern, as written in the schema.
        pattern: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_target_formats_correctly() {
        let err = SchemaError::InvalidTarget {
            type_name: "RawIrcMessageRequest",
        };
        assert_eq!(
            err.to_string(),
            "RawIrcMessageRequest: cannot decode into an absent target"
        );
    }

    #[test]
    fn json_errors_pass_through_unchanged() {
        let codec_err =
            serde_json::from_str::<serde_json::Value>("{").expect_err("truncated JSON fails");
        let expected = codec_err.to_string();
        let err = SchemaError::from(codec_err);
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn too_short_formats_correctly() {
        let err = ConstraintViolation::TooShort {
            field: "subject",
            min: 1,
            actual: 0,
        };
        assert_eq!(
            err.to_string(),
            "`subject` is too short: 0 characters, minimum 1"
        );
    }

    #[test]
    fn too_long_formats_correctly() {
        let err = ConstraintViolation::TooLong {
            field: "text",
            max: 40,
            actual: 41,
        };
        assert_eq!(err.to_string(), "`text` is too long: 41 characters, maximum 40");
    }

    #[test]
    fn pattern_mismatch_formats_correctly() {
        let err = ConstraintViolation::PatternMismatch {
            field: "channel",
            pattern: "^[#&][^ ,\\x07]{1,199}$",
        };
        assert_eq!(
            err.to_string(),
            "`channel` does not match pattern ^[#&][^ ,\\x07]{1,199}$"
        );
    }
}
