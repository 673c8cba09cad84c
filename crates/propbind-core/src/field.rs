// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-type field descriptor table.
//!
//! Instead of looking fields up at runtime, every destination type carries a
//! static table of its bindable fields plus one setter that dispatches on the
//! canonical field name. `#[derive(Bindable)]` generates both:
//!
//! ```text
//! struct Account                      Account::FIELDS
//! ┌──────────────────────────────┐    ┌──────────────┬───────────┬──────────┐
//! │ pub account_id: String       │ →  │ AccountID    │ Text      │ required │
//! │ pub is_default: Option<bool> │ →  │ IsDefault    │ Boolean   │ optional │
//! │ secret: String   (private)   │    └──────────────┴───────────┴──────────┘
//! └──────────────────────────────┘
//! ```
//!
//! The table is a `const`, built once at compile time, and read by the
//! introspector, the binder and the usage renderer.

use crate::error::CoerceError;

/// Declared kind of a bindable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Free text, bound verbatim.
    Text,
    /// `true` / `false`, any case.
    Boolean,
    /// Base-10 integer.
    Integer,
    /// UUID-shaped identifier.
    Identifier,
    /// RFC 3339 date-time.
    Timestamp,
    /// Text-backed value checked by a validity predicate.
    Enum
}

impl FieldKind {
    /// Tag shown after `=` in usage strings.
    pub const fn usage_tag(&self) -> &'static str {
        match self {
            Self::Text | Self::Enum => "STRING",
            Self::Boolean => "{True|False}",
            Self::Integer => "INTEGER",
            Self::Identifier => "UUID",
            Self::Timestamp => "DATETIME"
        }
    }
}

/// One entry of a type's field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    /// Canonical property name.
    pub name:     &'static str,
    /// Declared kind of the field (of the inner type for optional fields).
    pub kind:     FieldKind,
    /// Field is `Option<T>`: left `None` unless bound.
    pub optional: bool
}

impl FieldDescriptor {
    /// Table entry for a required-shape field.
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            optional: false
        }
    }

    /// Table entry for an `Option<T>` field.
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            optional: true
        }
    }
}

/// A destination record whose fields can be bound from text.
///
/// Normally derived:
///
/// ```rust,ignore
/// #[derive(Bindable, Default)]
/// #[bindable(rename_all = "PascalCase")]
/// pub struct Account {
///     #[property(rename = "AccountID")]
///     pub account_id:   String,
///     pub company_name: Option<String>,
/// }
/// ```
pub trait Bindable {
    /// Bindable fields in declaration order.
    const FIELDS: &'static [FieldDescriptor];

    /// Coerce `raw` and store it in the field named `name`.
    ///
    /// `name` must be a canonical name from [`Self::FIELDS`] (exact case).
    ///
    /// # Returns
    ///
    /// `Ok(true)` when the field was written, `Ok(false)` when no field has
    /// that name.
    ///
    /// # Errors
    ///
    /// The field type's [`CoerceError`] when `raw` does not convert. The
    /// field keeps its previous value in that case.
    fn bind_field(&mut self, name: &str, raw: &str) -> Result<bool, CoerceError>;

    /// Case-insensitive table lookup.
    fn field(name: &str) -> Option<&'static FieldDescriptor> {
        Self::FIELDS
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name))
    }
}
