// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Type inspection helpers.
//!
//! Detection is syntactic: a field is optional when its type path ends in
//! `Option<T>` (`Option`, `std::option::Option`, `core::option::Option`).
//! Type aliases of `Option` are not seen through.

use proc_macro2::{TokenStream, TokenTree};
use quote::ToTokens;
use syn::{GenericArgument, Ident, PathArguments, Type};

/// Inner `T` of an `Option<T>` type, or `None` for any other type.
///
/// # Example
///
/// ```rust,ignore
/// let ty: Type = parse_quote!(Option<String>);
/// assert!(option_inner(&ty).is_some());
/// ```
pub fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some() {
        return None;
    }
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) if args.args.len() == 1 => Some(inner),
        _ => None
    }
}

/// Check if `ty` names any of `params` anywhere in its tokens.
///
/// Used to decide which field types need a bound on the generated impl.
pub fn mentions_any(ty: &Type, params: &[&Ident]) -> bool {
    !params.is_empty() && tokens_mention(ty.to_token_stream(), params)
}

fn tokens_mention(tokens: TokenStream, params: &[&Ident]) -> bool {
    tokens.into_iter().any(|tree| match tree {
        TokenTree::Ident(ident) => params.iter().any(|param| **param == ident),
        TokenTree::Group(group) => tokens_mention(group.stream(), params),
        _ => false
    })
}
