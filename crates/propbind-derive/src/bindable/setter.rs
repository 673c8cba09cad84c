// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `Bindable::bind_field` generation.
//!
//! One match arm per table entry, keyed by the canonical property name:
//!
//! ```rust,ignore
//! fn bind_field(&mut self, name: &str, raw: &str) -> Result<bool, ::propbind::CoerceError> {
//!     match name {
//!         "AccountID" => {
//!             self.account_id = <String as ::propbind::FieldValue>::coerce(raw)?;
//!             Ok(true)
//!         }
//!         "CompanyName" => {
//!             self.company_name = Some(<String as ::propbind::FieldValue>::coerce(raw)?);
//!             Ok(true)
//!         }
//!         _ => Ok(false)
//!     }
//! }
//! ```
//!
//! The value is converted before the assignment, so a failed conversion
//! leaves the field as it was.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::{BindableDef, PropertyField, PropertyKind};

/// Generate the `bind_field` method.
pub fn generate(def: &BindableDef) -> TokenStream {
    let krate = &def.krate;
    let arms = def.fields.iter().map(|field| arm(krate, field));
    let unused = def.fields.is_empty().then(|| quote! { let _ = raw; });

    quote! {
        fn bind_field(
            &mut self,
            name: &str,
            raw: &str
        ) -> ::core::result::Result<bool, #krate::CoerceError> {
            #unused
            match name {
                #(#arms)*
                _ => ::core::result::Result::Ok(false)
            }
        }
    }
}

fn arm(krate: &syn::Path, field: &PropertyField) -> TokenStream {
    let name = &field.name;
    let ident = &field.ident;
    let value_ty = &field.value_ty;

    let coerced = match field.kind {
        PropertyKind::Value => quote! { <#value_ty as #krate::FieldValue>::coerce(raw)? },
        PropertyKind::Enum => quote! { #krate::coerce_enum::<#value_ty>(raw)? }
    };
    let value = if field.optional {
        quote! { ::core::option::Option::Some(#coerced) }
    } else {
        coerced
    };

    quote! {
        #name => {
            self.#ident = #value;
            ::core::result::Result::Ok(true)
        }
    }
}
