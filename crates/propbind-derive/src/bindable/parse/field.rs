// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level `#[property(...)]` attributes.
//!
//! Decides, per struct field, whether it enters the table, under which
//! property name, and how its text is coerced:
//!
//! ```text
//! pub name: String                       → Value,  required shape
//! pub name: Option<String>               → Value,  optional
//! #[property(enumeration)] pub e: E      → Enum,   required shape
//! #[property(skip)] pub cache: Cache     → (not in table)
//! secret: String                         → (not in table, private)
//! ```

use darling::FromField;
use syn::{Ident, Type, Visibility, ext::IdentExt};

use super::container::RenameRule;
use crate::utils::types::option_inner;

/// Field attributes as parsed by darling.
#[derive(Debug, FromField)]
#[darling(attributes(property))]
pub struct PropertyAttrs {
    /// Field identifier (always present, only named structs are accepted).
    pub ident: Option<Ident>,

    /// Field type.
    pub ty: Type,

    /// Field visibility; private fields are not bindable.
    pub vis: Visibility,

    /// Explicit property name.
    #[darling(default)]
    pub rename: Option<String>,

    /// Leave the field out of the table.
    #[darling(default)]
    pub skip: bool,

    /// Coerce through `ValidatedEnum` instead of `FieldValue`.
    #[darling(default)]
    pub enumeration: bool
}

/// How the generated setter converts text for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// `<T as FieldValue>::coerce`, kind taken from `FieldValue::KIND`.
    Value,
    /// `coerce_enum::<T>`, kind `FieldKind::Enum`.
    Enum
}

/// A field that made it into the table.
#[derive(Debug)]
pub struct PropertyField {
    /// Field identifier on the struct.
    pub ident:    Ident,
    /// Property name as rendered and matched.
    pub name:     String,
    /// Type the text is coerced into (inner type for `Option<T>`).
    pub value_ty: Type,
    /// Field is `Option<T>`.
    pub optional: bool,
    /// Coercion route.
    pub kind:     PropertyKind
}

impl PropertyField {
    /// Classify a parsed field.
    ///
    /// # Returns
    ///
    /// `Ok(None)` for private and skipped fields.
    ///
    /// # Errors
    ///
    /// - `skip` combined with `rename` or `enumeration`
    /// - empty `rename`
    pub fn from_attrs(
        attrs: PropertyAttrs,
        rename_all: Option<RenameRule>
    ) -> darling::Result<Option<Self>> {
        let ident = attrs.ident.ok_or_else(|| {
            darling::Error::custom("Bindable fields must be named").with_span(&attrs.ty)
        })?;

        if attrs.skip {
            if attrs.rename.is_some() || attrs.enumeration {
                return Err(darling::Error::custom(
                    "`skip` cannot be combined with `rename` or `enumeration`"
                )
                .with_span(&ident));
            }
            return Ok(None);
        }

        if matches!(attrs.vis, Visibility::Inherited) {
            return Ok(None);
        }

        let name = match attrs.rename {
            Some(rename) if rename.trim().is_empty() => {
                return Err(darling::Error::custom("`rename` must not be empty").with_span(&ident));
            }
            Some(rename) => rename,
            None => {
                let field = ident.unraw().to_string();
                match rename_all {
                    Some(rule) => rule.apply(&field),
                    None => field
                }
            }
        };

        let (value_ty, optional) = match option_inner(&attrs.ty) {
            Some(inner) => (inner.clone(), true),
            None => (attrs.ty, false)
        };

        let kind = if attrs.enumeration {
            PropertyKind::Enum
        } else {
            PropertyKind::Value
        };

        Ok(Some(Self {
            ident,
            name,
            value_ty,
            optional,
            kind
        }))
    }
}
