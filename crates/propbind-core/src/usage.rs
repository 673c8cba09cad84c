// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Schema introspection and usage rendering.

use std::fmt::Write;

use tracing::warn;

use crate::{
    field::{Bindable, FieldKind},
    property::{Properties, Property}
};

/// Separator written before every usage entry.
const ENTRY_PREFIX: &str = "\n         ";

/// One optional [`Property`] per bindable field of `T`, in declaration order.
///
/// Required flags and defaults are left for the caller to set. A name
/// repeated in a hand-written table (ignoring case) is kept once, at its
/// first position.
pub fn get_properties<T: Bindable>() -> Properties {
    Properties::from_iter_dedup(T::FIELDS.iter().map(|field| Property::new(field.name)))
}

/// Render the usage string of `schema` against the fields of `T`.
///
/// Every entry is `Name=TAG`, preceded by a newline and nine spaces.
/// Optional entries are wrapped in brackets. There is no trailing newline.
///
/// ```text
///
///          AccountID=STRING
///          [IsDefault={True|False}]
/// ```
pub fn generate_usage_string<T: Bindable>(schema: &Properties) -> String {
    let mut usage = String::new();
    for property in schema {
        let kind = match T::field(&property.name) {
            Some(field) => field.kind,
            None => {
                warn!(property = %property.name, "usage entry has no matching field, rendering as text");
                FieldKind::Text
            }
        };

        if property.required {
            let _ = write!(usage, "{ENTRY_PREFIX}{}={}", property.name, kind.usage_tag());
        } else {
            let _ = write!(usage, "{ENTRY_PREFIX}[{}={}]", property.name, kind.usage_tag());
        }
    }
    usage
}
