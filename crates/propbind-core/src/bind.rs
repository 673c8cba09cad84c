// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Binding `key=value` inputs onto a destination record.
//!
//! # Algorithm
//!
//! For each property, in schema order:
//!
//! 1. take the **last** input whose key matches the name (ignoring case);
//! 2. otherwise take the property's default, if any;
//! 3. otherwise fail if the property is required, or skip it;
//! 4. coerce the text with the field's type and store it.
//!
//! The first failure aborts the call. Properties bound before it stay bound;
//! nothing after it is touched.
//!
//! # Unknown Keys
//!
//! Inputs that match no property are ignored by default, which lets a
//! command read loose flags (see [`bool_arg`](crate::bool_arg)) from the same
//! argument list. [`UnknownKeys::Reject`] turns them into an error raised
//! before any field is written.

use tracing::{debug, trace};

use crate::{
    error::{BindError, Result},
    field::Bindable,
    input::{Input, find_input, parse_args},
    property::Properties
};

/// What to do with inputs that match no schema property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownKeys {
    /// Leave them alone.
    #[default]
    Ignore,
    /// Fail with [`BindError::UnknownProperty`].
    Reject
}

/// Runtime binding options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BindOptions {
    /// Policy for inputs that match no property.
    pub unknown_keys: UnknownKeys
}

impl BindOptions {
    /// Permissive defaults: unknown keys are ignored.
    pub const fn new() -> Self {
        Self {
            unknown_keys: UnknownKeys::Ignore
        }
    }

    /// Every input must match a property.
    pub const fn strict() -> Self {
        Self {
            unknown_keys: UnknownKeys::Reject
        }
    }

    /// Replace the unknown-key policy.
    #[must_use]
    pub const fn with_unknown_keys(mut self, unknown_keys: UnknownKeys) -> Self {
        self.unknown_keys = unknown_keys;
        self
    }
}

/// Bind `inputs` onto `target` using `schema`, ignoring unknown keys.
///
/// # Errors
///
/// - [`BindError::MissingRequiredProperty`] — required property without
///   input or default
/// - [`BindError::Coerce`] — value rejected by the field type
/// - [`BindError::UnknownField`] — schema names a field `T` does not have
///
/// # Example
///
/// ```rust,ignore
/// let mut account = Account::default();
/// load_properties(&mut account, &schema, &[Input::new("accountid", "123")])?;
/// ```
pub fn load_properties<T: Bindable>(
    target: &mut T,
    schema: &Properties,
    inputs: &[Input]
) -> Result<()> {
    load_properties_with(target, schema, inputs, BindOptions::new())
}

/// [`load_properties`] with explicit [`BindOptions`].
///
/// # Errors
///
/// As [`load_properties`], plus [`BindError::UnknownProperty`] under
/// [`UnknownKeys::Reject`].
pub fn load_properties_with<T: Bindable>(
    target: &mut T,
    schema: &Properties,
    inputs: &[Input],
    options: BindOptions
) -> Result<()> {
    for input in inputs {
        if schema.get(&input.key).is_some() {
            continue;
        }
        match options.unknown_keys {
            UnknownKeys::Ignore => debug!(key = %input.key, "ignoring input with no matching property"),
            UnknownKeys::Reject => {
                return Err(BindError::UnknownProperty {
                    key: input.key.clone()
                });
            }
        }
    }

    for property in schema {
        let field = T::field(&property.name).ok_or_else(|| BindError::UnknownField {
            name: property.name.clone()
        })?;

        let (raw, source) = match find_input(inputs, &property.name) {
            Some(input) => (input.value.as_str(), "input"),
            None => match property.default.as_deref() {
                Some(default) => (default, "default"),
                None if property.required => {
                    return Err(BindError::MissingRequiredProperty {
                        name: property.name.clone()
                    });
                }
                None => {
                    trace!(property = %property.name, "no input, leaving field unchanged");
                    continue;
                }
            }
        };

        let written = target
            .bind_field(field.name, raw)
            .map_err(|err| BindError::coerce(&property.name, err))?;
        if !written {
            return Err(BindError::UnknownField {
                name: property.name.clone()
            });
        }
        debug!(property = %property.name, kind = ?field.kind, source, "bound property");
    }

    Ok(())
}

/// Split raw `key=value` tokens and bind them, ignoring unknown keys.
///
/// # Errors
///
/// [`BindError::MalformedArgument`] for a token without `=`, otherwise as
/// [`load_properties`].
pub fn load_args<T: Bindable, S: AsRef<str>>(
    target: &mut T,
    schema: &Properties,
    args: &[S]
) -> Result<()> {
    let inputs = parse_args(args)?;
    load_properties(target, schema, &inputs)
}
