// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Bindable derive macro implementation.
//!
//! # Architecture
//!
//! ```text
//! bindable.rs (orchestrator)
//! │
//! ├── parse/       → Attribute parsing (BindableDef, PropertyField)
//! │   ├── container.rs → #[bindable(...)], rename rules
//! │   └── field.rs     → #[property(...)], field classification
//! │
//! ├── table.rs     → Bindable::FIELDS
//! └── setter.rs    → Bindable::bind_field
//! ```

mod parse;
mod setter;
mod table;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, Generics, Ident, parse_macro_input, parse_quote};

use self::parse::{BindableDef, PropertyKind};
use crate::utils::types::mentions_any;

/// Main entry point for the Bindable derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match BindableDef::from_derive_input(&input) {
        Ok(def) => generate(&def).into(),
        Err(err) => err.write_errors().into()
    }
}

fn generate(def: &BindableDef) -> TokenStream2 {
    let krate = &def.krate;
    let ident = &def.ident;
    let generics = bounded_generics(def);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let fields = table::generate(def);
    let bind_field = setter::generate(def);

    quote! {
        #[automatically_derived]
        impl #impl_generics #krate::Bindable for #ident #ty_generics #where_clause {
            #fields
            #bind_field
        }
    }
}

/// Struct generics plus a `FieldValue` / `ValidatedEnum` bound for every
/// bindable field type that mentions a type parameter.
fn bounded_generics(def: &BindableDef) -> Generics {
    let krate = &def.krate;
    let params: Vec<&Ident> = def.generics.type_params().map(|param| &param.ident).collect();
    let mut generics = def.generics.clone();

    for field in &def.fields {
        if !mentions_any(&field.value_ty, &params) {
            continue;
        }
        let ty = &field.value_ty;
        let predicate = match field.kind {
            PropertyKind::Value => parse_quote!(#ty: #krate::FieldValue),
            PropertyKind::Enum => parse_quote!(#ty: #krate::ValidatedEnum)
        };
        generics.make_where_clause().predicates.push(predicate);
    }
    generics
}
