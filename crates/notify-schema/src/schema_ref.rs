//! Links each payload type to the JSON Schema it mirrors.

/// Expands to the base URL literal so `concat!` can extend it.
macro_rules! schema_base {
    () => {
        "https://taskcluster-staging.net/schemas/notify/v1/"
    };
}

pub(crate) use schema_base;

/// Base URL under which the notification schemas are published.
pub const SCHEMA_BASE: &str = schema_base!();

/// A payload type generated from a published JSON Schema.
///
/// The schema at [`SchemaReference::SCHEMA_ID`] is authoritative for field
/// names and declared constraints.
pub trait SchemaReference {
    /// Absolute URL (with fragment) of the schema this type mirrors.
    const SCHEMA_ID: &'static str;
}

/// Implements [`SchemaReference`] from a path relative to [`SCHEMA_BASE`].
macro_rules! schema_reference {
    ($ty:ty, $path:literal) => {
        impl $crate::schema_ref::SchemaReference for $ty {
            const SCHEMA_ID: &'static str =
                concat!($crate::schema_ref::schema_base!(), $path);
        }
    };
}

pub(crate) use schema_reference;
