// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Attribute Quick Reference
//!
//! ## Container-Level `#[bindable(...)]`
//!
//! ```rust,ignore
//! #[derive(Bindable)]
//! #[bindable(
//!     rename_all = "PascalCase",  // Optional: property naming rule (default: field name as-is)
//!     crate = "propbind_core"     // Optional: path of the runtime crate (default: ::propbind)
//! )]
//! pub struct Account { /* ... */ }
//! ```
//!
//! ## Field-Level `#[property(...)]`
//!
//! ```rust,ignore
//! pub struct Account {
//!     #[property(rename = "AccountID")]   // Explicit property name
//!     pub account_id: String,
//!
//!     pub company_name: Option<String>,   // Optional field: None until bound
//!
//!     #[property(enumeration)]            // Checked with ValidatedEnum::is_valid
//!     pub currency: Currency,
//!
//!     #[property(skip)]                   // Not part of the field table
//!     pub audit: AuditLog,
//!
//!     secret: String,                     // Private fields are never bound
//! }
//! ```
//!
//! # Generated Code Overview
//!
//! | Item | Description |
//! |------|-------------|
//! | `Bindable::FIELDS` | Field table: name, kind, optional flag, in declaration order |
//! | `Bindable::bind_field` | Setter dispatching on the canonical property name |
//!
//! # Naming Rules
//!
//! | `rename_all` | `account_id` becomes |
//! |--------------|----------------------|
//! | (none) | `account_id` |
//! | `"PascalCase"` | `AccountId` |
//! | `"camelCase"` | `accountId` |
//! | `"snake_case"` | `account_id` |
//! | `"kebab-case"` | `account-id` |
//! | `"SCREAMING_SNAKE_CASE"` | `ACCOUNT_ID` |
//! | `"lowercase"` | `accountid` |
//! | `"UPPERCASE"` | `ACCOUNTID` |
//!
//! `#[property(rename = "...")]` always wins over `rename_all`.

mod bindable;
mod utils;

use proc_macro::TokenStream;

/// Derive macro building the field table used by the propbind binder.
///
/// # Overview
///
/// Every public named field becomes one property. The field type decides the
/// property kind:
///
/// | Field type | Kind | Usage tag |
/// |------------|------|-----------|
/// | `String` | Text | `STRING` |
/// | `bool` | Boolean | `{True\|False}` |
/// | integers | Integer | `INTEGER` |
/// | `Identifier`, `Uuid` | Identifier | `UUID` |
/// | `DateTime<Utc>` | Timestamp | `DATETIME` |
/// | `#[property(enumeration)] T` | Enum | `STRING` |
///
/// `Option<T>` fields use the kind of `T` and stay `None` until bound.
///
/// For generic structs, every bindable field type that mentions a type
/// parameter gets a bound on the generated impl: `Ty: FieldValue`, or
/// `Ty: ValidatedEnum` for `#[property(enumeration)]` fields. No bound is
/// added for skipped or private fields.
///
/// # Example
///
/// ```rust,ignore
/// use propbind::{Bindable, get_properties, load_args};
///
/// #[derive(Bindable, Default)]
/// #[bindable(rename_all = "PascalCase")]
/// pub struct Account {
///     #[property(rename = "AccountID")]
///     pub account_id:   String,
///     pub company_name: Option<String>,
/// }
///
/// let mut schema = get_properties::<Account>();
/// schema.set_required("AccountID", true)?;
///
/// let mut account = Account::default();
/// load_args(&mut account, &schema, &["accountid=123", "companyname=google"])?;
/// ```
///
/// # Compile Errors
///
/// - applied to an enum, union, tuple struct or unit struct
/// - unknown `rename_all` rule
/// - `skip` combined with `rename` or `enumeration`
/// - empty `rename`
/// - two properties with the same name (ignoring case)
#[proc_macro_derive(Bindable, attributes(bindable, property))]
pub fn derive_bindable(input: TokenStream) -> TokenStream {
    bindable::derive(input)
}
