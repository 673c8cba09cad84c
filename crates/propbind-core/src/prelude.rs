// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use propbind_core::prelude::*;
//! ```

pub use crate::{
    BindError, BindOptions, Bindable, FieldValue, Identifier, Input, Properties, Property,
    UnknownKeys, ValidatedEnum, generate_usage_string, get_properties, load_args,
    load_properties, load_properties_with
};
