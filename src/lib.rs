// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # propbind
//!
//! One crate, all features. Re-exports:
//! - [`Bindable`](macro@Bindable) derive macro from `propbind-derive`
//! - All types from `propbind-core` ([`Properties`], [`load_properties`],
//!   [`generate_usage_string`], ...)
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use propbind::{Bindable, get_properties, generate_usage_string, load_args};
//!
//! #[derive(Bindable, Default)]
//! #[bindable(rename_all = "PascalCase")]
//! pub struct Account {
//!     #[property(rename = "AccountID")]
//!     pub account_id: String,
//!     pub company_name: Option<String>,
//! }
//!
//! let mut schema = get_properties::<Account>();
//! schema.set_required("AccountID", true)?;
//!
//! let usage = generate_usage_string::<Account>(&schema);
//!
//! let mut account = Account::default();
//! load_args(&mut account, &schema, &["accountid=123"])?;
//! ```

// Re-export derive macro
// Re-export all core types
pub use propbind_core::*;
#[cfg(feature = "derive")]
#[cfg_attr(docsrs, doc(cfg(feature = "derive")))]
pub use propbind_derive::Bindable;
