// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

//! # Overview
//!
//! - [`Property`], [`Properties`] — the schema
//! - [`Bindable`], [`FieldDescriptor`] — per-type field table
//! - [`FieldValue`], [`ValidatedEnum`], [`Identifier`] — text coercion
//! - [`load_properties`], [`load_args`], [`BindOptions`] — the binder
//! - [`get_properties`], [`generate_usage_string`] — introspection and usage
//! - [`parse_args`], [`bool_arg`] — raw argument helpers
//! - [`prelude`] — convenient re-exports

mod bind;
mod coerce;
mod error;
mod field;
mod input;
pub mod prelude;
mod property;
mod usage;

pub use bind::{BindOptions, UnknownKeys, load_args, load_properties, load_properties_with};
pub use coerce::{FieldValue, Identifier, ValidatedEnum, coerce_enum, parse_bool};
pub use error::{BindError, CoerceError, Result};
pub use field::{Bindable, FieldDescriptor, FieldKind};
pub use input::{Input, bool_arg, find_input, parse_args};
pub use property::{Properties, Property, PropertyMut};
pub use usage::{generate_usage_string, get_properties};

/// Re-exported for `DateTime<Utc>` fields.
pub use chrono;
/// Re-exported for strict [`uuid::Uuid`] fields.
pub use uuid;
