// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for `#[derive(Bindable)]`.
//!
//! # Module Structure
//!
//! ```text
//! parse/
//! ├── container.rs — BindableAttrs (darling), RenameRule
//! └── field.rs     — PropertyAttrs (darling), PropertyField
//! ```
//!
//! [`BindableDef`] is what the generators consume: the struct identity plus
//! the fields that made it into the table, already named and classified.

mod container;
mod field;

use std::collections::HashMap;

use darling::{FromDeriveInput, ast};
use syn::{Data, DeriveInput, Fields, Generics, Ident};

pub use self::{
    container::{BindableAttrs, RenameRule},
    field::{PropertyField, PropertyKind}
};

/// Complete parsed destination definition.
#[derive(Debug)]
pub struct BindableDef {
    /// Struct identifier.
    pub ident:    Ident,
    /// Struct generics, forwarded to the impl.
    pub generics: Generics,
    /// Path of the runtime crate (`::propbind` unless overridden).
    pub krate:    syn::Path,
    /// Bindable fields in declaration order.
    pub fields:   Vec<PropertyField>
}

impl BindableDef {
    /// Parse from syn's `DeriveInput`.
    ///
    /// # Errors
    ///
    /// - Applied to enum, union, tuple struct or unit struct
    /// - Invalid `#[bindable(...)]` / `#[property(...)]` options
    /// - Two properties sharing a name (ignoring case)
    ///
    /// All field errors are collected and reported together.
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        check_shape(input)?;
        let attrs = BindableAttrs::from_derive_input(input)?;
        let rename_all = attrs.rename_all;

        let raw_fields = match attrs.data {
            ast::Data::Struct(fields) => fields.fields,
            ast::Data::Enum(_) => {
                return Err(darling::Error::custom(
                    "Bindable can only be derived for structs with named fields"
                )
                .with_span(&attrs.ident));
            }
        };

        let mut errors = darling::Error::accumulator();
        let mut fields = Vec::with_capacity(raw_fields.len());
        let mut seen: HashMap<String, String> = HashMap::new();

        for raw in raw_fields {
            let Some(field) = errors.handle(PropertyField::from_attrs(raw, rename_all)) else {
                continue;
            };
            let Some(field) = field else {
                continue;
            };

            let folded = field.name.to_ascii_lowercase();
            if let Some(previous) = seen.get(&folded) {
                errors.push(
                    darling::Error::custom(format!(
                        "duplicate property name `{}` (already used by field `{}`)",
                        field.name, previous
                    ))
                    .with_span(&field.ident)
                );
                continue;
            }
            seen.insert(folded, field.ident.to_string());
            fields.push(field);
        }

        errors.finish()?;

        Ok(Self {
            ident: attrs.ident,
            generics: attrs.generics,
            krate: attrs.krate.unwrap_or_else(default_crate_path),
            fields
        })
    }
}

/// Reject everything but structs with named fields, pointing at the type name.
fn check_shape(input: &DeriveInput) -> darling::Result<()> {
    match &input.data {
        Data::Struct(data) if matches!(data.fields, Fields::Named(_)) => Ok(()),
        _ => Err(darling::Error::custom(
            "Bindable can only be derived for structs with named fields"
        )
        .with_span(&input.ident))
    }
}

/// Runtime crate path used when `#[bindable(crate = ...)]` is absent.
pub fn default_crate_path() -> syn::Path {
    syn::parse_quote!(::propbind)
}
