// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Text to typed value conversion.
//!
//! # Supported Types
//!
//! | Field type | Kind | Accepted text |
//! |------------|------|---------------|
//! | `String` | Text | anything, verbatim |
//! | `bool` | Boolean | `true` / `false`, any case |
//! | `i8`..`i64`, `u8`..`u64`, `isize`, `usize` | Integer | base-10 literal in range |
//! | [`Identifier`] | Identifier | anything, verbatim |
//! | [`uuid::Uuid`] | Identifier | any format `Uuid::parse_str` accepts |
//! | `chrono::DateTime<Utc>` | Timestamp | RFC 3339, normalized to UTC |
//! | `T: ValidatedEnum` | Enum | text accepted by `T::is_valid` |
//!
//! `Option<T>` fields use the rules of `T` and are set to `Some` on success.

use std::{fmt, ops::Deref};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{error::CoerceError, field::FieldKind};

/// A field type that can be produced from raw text.
pub trait FieldValue: Sized {
    /// Kind reported in field tables and usage strings.
    const KIND: FieldKind;

    /// Convert `raw` into `Self`.
    ///
    /// # Errors
    ///
    /// A [`CoerceError`] naming the offending text.
    fn coerce(raw: &str) -> Result<Self, CoerceError>;
}

/// A text-backed value with a validity predicate.
///
/// The raw text is wrapped first and validated afterwards, so the type must
/// be able to hold invalid text (typically a newtype over `String`):
///
/// ```rust
/// use propbind_core::{ValidatedEnum, coerce_enum};
///
/// #[derive(Debug, PartialEq)]
/// struct Currency(String);
///
/// impl ValidatedEnum for Currency {
///     fn from_text(text: &str) -> Self {
///         Self(text.to_string())
///     }
///
///     fn is_valid(&self) -> bool {
///         matches!(self.0.as_str(), "USD" | "EUR")
///     }
/// }
///
/// assert_eq!(coerce_enum::<Currency>("USD").unwrap(), Currency("USD".into()));
/// assert_eq!(
///     coerce_enum::<Currency>("XYZ").unwrap_err().to_string(),
///     "Invalid value XYZ for enum"
/// );
/// ```
pub trait ValidatedEnum: Sized {
    /// Wrap raw text without checking it.
    fn from_text(text: &str) -> Self;

    /// Check the wrapped text against the allowed literals.
    fn is_valid(&self) -> bool;
}

/// Wrap `raw` into `E` and run its validity predicate.
///
/// # Errors
///
/// [`CoerceError::InvalidEnumValue`] when `E::is_valid` reports `false`.
pub fn coerce_enum<E: ValidatedEnum>(raw: &str) -> Result<E, CoerceError> {
    let value = E::from_text(raw);
    if value.is_valid() {
        Ok(value)
    } else {
        Err(CoerceError::InvalidEnumValue {
            value: raw.to_string()
        })
    }
}

/// Parse `true` / `false` ignoring ASCII case.
///
/// # Errors
///
/// [`CoerceError::InvalidBool`] for any other text.
pub fn parse_bool(raw: &str) -> Result<bool, CoerceError> {
    if raw.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(CoerceError::InvalidBool {
            value: raw.to_string()
        })
    }
}

impl FieldValue for String {
    const KIND: FieldKind = FieldKind::Text;

    fn coerce(raw: &str) -> Result<Self, CoerceError> {
        Ok(raw.to_string())
    }
}

impl FieldValue for bool {
    const KIND: FieldKind = FieldKind::Boolean;

    fn coerce(raw: &str) -> Result<Self, CoerceError> {
        parse_bool(raw)
    }
}

macro_rules! integer_field_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                const KIND: FieldKind = FieldKind::Integer;

                fn coerce(raw: &str) -> Result<Self, CoerceError> {
                    raw.parse::<$ty>().map_err(|err| CoerceError::InvalidInteger {
                        value:  raw.to_string(),
                        reason: err.to_string()
                    })
                }
            }
        )*
    };
}

integer_field_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl FieldValue for Uuid {
    const KIND: FieldKind = FieldKind::Identifier;

    fn coerce(raw: &str) -> Result<Self, CoerceError> {
        Uuid::parse_str(raw).map_err(|err| CoerceError::InvalidUuid {
            value:  raw.to_string(),
            reason: err.to_string()
        })
    }
}

impl FieldValue for DateTime<Utc> {
    const KIND: FieldKind = FieldKind::Timestamp;

    fn coerce(raw: &str) -> Result<Self, CoerceError> {
        DateTime::parse_from_rfc3339(raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(|err| CoerceError::InvalidTimestamp {
                value:  raw.to_string(),
                reason: err.to_string()
            })
    }
}

/// UUID-shaped identifier kept as opaque text.
///
/// Binding never rejects an identifier; checking its format is left to
/// whoever consumes it. Use [`uuid::Uuid`] for fields that must parse.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identifier(String);

impl Identifier {
    /// Wrap text as an identifier.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Parse as a [`Uuid`].
    ///
    /// # Errors
    ///
    /// [`CoerceError::InvalidUuid`] when the text is not a UUID.
    pub fn to_uuid(&self) -> Result<Uuid, CoerceError> {
        Uuid::coerce(&self.0)
    }
}

impl FieldValue for Identifier {
    const KIND: FieldKind = FieldKind::Identifier;

    fn coerce(raw: &str) -> Result<Self, CoerceError> {
        Ok(Self::new(raw))
    }
}

impl Deref for Identifier {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<Uuid> for Identifier {
    fn from(value: Uuid) -> Self {
        Self(value.to_string())
    }
}
