// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Container-level `#[bindable(...)]` attributes.

use convert_case::{Case, Casing};
use darling::{FromDeriveInput, FromMeta, ast::Data};
use syn::{Generics, Ident};

use super::field::PropertyAttrs;

/// Container attributes as parsed by darling.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Bindable)]
/// #[bindable(rename_all = "PascalCase", crate = "propbind_core")]
/// pub struct Account { /* ... */ }
/// ```
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(bindable), supports(struct_named))]
pub struct BindableAttrs {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics.
    pub generics: Generics,

    /// Named fields with their `#[property(...)]` attributes.
    pub data: Data<(), PropertyAttrs>,

    /// Naming rule applied to field identifiers.
    ///
    /// Field identifiers are used as-is when absent.
    #[darling(default)]
    pub rename_all: Option<RenameRule>,

    /// Runtime crate path for generated code.
    #[darling(default, rename = "crate")]
    pub krate: Option<syn::Path>
}

/// Naming rule for `rename_all`.
///
/// Accepts the spellings serde uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameRule {
    /// `AccountId`
    Pascal,
    /// `accountId`
    Camel,
    /// `account_id`
    Snake,
    /// `ACCOUNT_ID`
    ScreamingSnake,
    /// `account-id`
    Kebab,
    /// `accountid`
    Lower,
    /// `ACCOUNTID`
    Upper
}

impl RenameRule {
    /// Apply the rule to a snake_case field identifier.
    pub fn apply(self, field: &str) -> String {
        let snake = field.from_case(Case::Snake);
        match self {
            Self::Pascal => snake.to_case(Case::Pascal),
            Self::Camel => snake.to_case(Case::Camel),
            Self::Snake => snake.to_case(Case::Snake),
            Self::ScreamingSnake => snake.to_case(Case::Snake).to_uppercase(),
            Self::Kebab => snake.to_case(Case::Kebab),
            Self::Lower => field.replace('_', "").to_lowercase(),
            Self::Upper => field.replace('_', "").to_uppercase()
        }
    }
}

impl FromMeta for RenameRule {
    fn from_string(value: &str) -> darling::Result<Self> {
        match value {
            "PascalCase" => Ok(Self::Pascal),
            "camelCase" => Ok(Self::Camel),
            "snake_case" => Ok(Self::Snake),
            "SCREAMING_SNAKE_CASE" => Ok(Self::ScreamingSnake),
            "kebab-case" => Ok(Self::Kebab),
            "lowercase" => Ok(Self::Lower),
            "UPPERCASE" => Ok(Self::Upper),
            _ => Err(darling::Error::unknown_value(value))
        }
    }
}
