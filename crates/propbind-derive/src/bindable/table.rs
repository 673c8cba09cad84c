// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `Bindable::FIELDS` generation.
//!
//! ```rust,ignore
//! const FIELDS: &'static [::propbind::FieldDescriptor] = &[
//!     ::propbind::FieldDescriptor::new("AccountID", <String as ::propbind::FieldValue>::KIND),
//!     ::propbind::FieldDescriptor::optional("IsDefault", <bool as ::propbind::FieldValue>::KIND),
//!     ::propbind::FieldDescriptor::new("Currency", ::propbind::FieldKind::Enum),
//! ];
//! ```

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::{BindableDef, PropertyField, PropertyKind};

/// Generate the `FIELDS` associated constant.
pub fn generate(def: &BindableDef) -> TokenStream {
    let krate = &def.krate;
    let entries = def.fields.iter().map(|field| entry(krate, field));

    quote! {
        const FIELDS: &'static [#krate::FieldDescriptor] = &[#(#entries),*];
    }
}

fn entry(krate: &syn::Path, field: &PropertyField) -> TokenStream {
    let name = &field.name;
    let value_ty = &field.value_ty;

    let kind = match field.kind {
        PropertyKind::Value => quote! { <#value_ty as #krate::FieldValue>::KIND },
        PropertyKind::Enum => quote! { #krate::FieldKind::Enum }
    };
    let constructor = if field.optional {
        quote! { optional }
    } else {
        quote! { new }
    };

    quote! { #krate::FieldDescriptor::#constructor(#name, #kind) }
}
