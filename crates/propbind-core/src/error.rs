// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types for schema construction, coercion and binding.
//!
//! Two layers:
//!
//! | Type | Raised by | Carries |
//! |------|-----------|---------|
//! | [`CoerceError`] | field setters ([`FieldValue::coerce`](crate::FieldValue::coerce)) | offending text |
//! | [`BindError`] | binder, argument splitting, schema helpers | property name + cause |
//!
//! A coercion failure is wrapped in [`BindError::Coerce`] with the property
//! it was bound for, but displays exactly as the inner error so messages such
//! as `Invalid value FOO1 for enum` reach the user unchanged.

use thiserror::Error;

/// Result alias for binding operations.
pub type Result<T> = std::result::Result<T, BindError>;

/// Raw text could not be converted into a field's declared kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoerceError {
    /// Value rejected by a validated enum's validity predicate.
    #[error("Invalid value {value} for enum")]
    InvalidEnumValue {
        /// Text as supplied by the user.
        value: String
    },

    /// Anything other than `true` / `false` (any case).
    #[error("invalid boolean value {value:?}: expected true or false")]
    InvalidBool {
        /// Text as supplied by the user.
        value: String
    },

    /// Not a base-10 integer literal in range of the field type.
    #[error("invalid integer value {value:?}: {reason}")]
    InvalidInteger {
        /// Text as supplied by the user.
        value:  String,
        /// Parser message.
        reason: String
    },

    /// Not an RFC 3339 date-time.
    #[error("invalid date-time value {value:?}: {reason}")]
    InvalidTimestamp {
        /// Text as supplied by the user.
        value:  String,
        /// Parser message.
        reason: String
    },

    /// Not a UUID (strict [`uuid::Uuid`] fields only).
    #[error("invalid UUID value {value:?}: {reason}")]
    InvalidUuid {
        /// Text as supplied by the user.
        value:  String,
        /// Parser message.
        reason: String
    }
}

impl CoerceError {
    /// Offending text, whatever the variant.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::InvalidEnumValue {
                value
            }
            | Self::InvalidBool {
                value
            }
            | Self::InvalidInteger {
                value, ..
            }
            | Self::InvalidTimestamp {
                value, ..
            }
            | Self::InvalidUuid {
                value, ..
            } => value
        }
    }

    /// Check if a validated enum rejected the value.
    pub const fn is_enum(&self) -> bool {
        matches!(self, Self::InvalidEnumValue { .. })
    }
}

/// Errors returned by schema construction and binding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// A required property had neither an input nor a default.
    #[error("missing required property {name}")]
    MissingRequiredProperty {
        /// Schema name of the property.
        name: String
    },

    /// The value supplied for a property could not be coerced.
    #[error("{source}")]
    Coerce {
        /// Schema name of the property.
        property: String,
        /// Underlying conversion failure.
        #[source]
        source:   CoerceError
    },

    /// The schema names a property the destination type has no field for.
    #[error("property {name} does not match any field of the destination")]
    UnknownField {
        /// Schema name of the property.
        name: String
    },

    /// An input key matched no property (strict mode only).
    #[error("unknown property {key}")]
    UnknownProperty {
        /// Key as typed by the user.
        key: String
    },

    /// A raw argument was not of the form `key=value`.
    #[error("invalid argument {arg:?}: expected key=value")]
    MalformedArgument {
        /// Raw token.
        arg: String
    },

    /// A schema already contains this name (case-insensitive).
    #[error("duplicate property {name}")]
    DuplicateProperty {
        /// Name being inserted.
        name: String
    },

    /// A schema mutation referenced a name the schema does not contain.
    #[error("property {name} not found")]
    PropertyNotFound {
        /// Name being looked up.
        name: String
    }
}

impl BindError {
    /// Wrap a coercion failure for `property`.
    pub fn coerce(property: impl Into<String>, source: CoerceError) -> Self {
        Self::Coerce {
            property: property.into(),
            source
        }
    }

    /// Check if a required property was missing.
    pub const fn is_missing_required(&self) -> bool {
        matches!(self, Self::MissingRequiredProperty { .. })
    }

    /// Check if a value failed type coercion.
    pub const fn is_coercion(&self) -> bool {
        matches!(self, Self::Coerce { .. })
    }

    /// Property (or key) the error refers to, when there is one.
    #[must_use]
    pub fn property(&self) -> Option<&str> {
        match self {
            Self::MissingRequiredProperty {
                name
            }
            | Self::UnknownField {
                name
            }
            | Self::DuplicateProperty {
                name
            }
            | Self::PropertyNotFound {
                name
            } => Some(name),
            Self::Coerce {
                property, ..
            } => Some(property),
            Self::UnknownProperty {
                key
            } => Some(key),
            Self::MalformedArgument {
                ..
            } => None
        }
    }
}
