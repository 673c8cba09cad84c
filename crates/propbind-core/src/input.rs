// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! User-supplied `key=value` pairs.
//!
//! The shell has already split the command line into tokens; this module
//! only splits each token at its first `=`.

use std::{fmt, str::FromStr};

use crate::{
    coerce::parse_bool,
    error::{BindError, Result}
};

/// One `key=value` pair as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Input {
    /// Key in whatever case the user typed it.
    pub key:   String,
    /// Raw value text.
    pub value: String
}

impl Input {
    /// Build a pair from its parts.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key:   key.into(),
            value: value.into()
        }
    }

    /// Case-insensitive key comparison.
    pub fn matches(&self, key: &str) -> bool {
        self.key.eq_ignore_ascii_case(key)
    }
}

impl FromStr for Input {
    type Err = BindError;

    /// Split at the first `=`.
    ///
    /// The key is trimmed and must not be empty. The value is kept verbatim
    /// and may be empty or contain further `=` characters.
    fn from_str(arg: &str) -> Result<Self> {
        let malformed = || BindError::MalformedArgument {
            arg: arg.to_string()
        };
        let (key, value) = arg.split_once('=').ok_or_else(malformed)?;
        let key = key.trim();
        if key.is_empty() {
            return Err(malformed());
        }
        Ok(Self::new(key, value))
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Split raw command-line tokens into [`Input`] pairs, keeping their order.
///
/// # Errors
///
/// [`BindError::MalformedArgument`] for the first token that has no `=` or
/// an empty key.
///
/// # Example
///
/// ```rust
/// use propbind_core::{Input, parse_args};
///
/// let inputs = parse_args(&["Name=Bob", "Note=a=b", "Email="]).unwrap();
/// assert_eq!(inputs, [
///     Input::new("Name", "Bob"),
///     Input::new("Note", "a=b"),
///     Input::new("Email", "")
/// ]);
/// ```
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Vec<Input>> {
    args.iter().map(|arg| arg.as_ref().parse()).collect()
}

/// Last input whose key matches `key`, ignoring case.
pub fn find_input<'a>(inputs: &'a [Input], key: &str) -> Option<&'a Input> {
    inputs.iter().rev().find(|input| input.matches(key))
}

/// Read a loose boolean flag that is not part of any schema.
///
/// Returns the value of the last input named `key` (ignoring case) that
/// parses as a boolean, or `default` when there is none.
///
/// Flags follow the same rules as schema booleans, not a looser shorthand:
/// the key is matched ignoring case, a later occurrence overrides an
/// earlier one, and only `true` / `false` (any case) count. `1`, `0`, `t`
/// and `f` are treated as unparsable and skipped.
///
/// ```rust
/// use propbind_core::{Input, bool_arg};
///
/// let inputs = [Input::new("cancelAllSubscriptions", "TRUE")];
/// assert!(bool_arg(&inputs, "cancelallsubscriptions", false));
/// assert!(!bool_arg(&inputs, "writeOffUnpaidInvoices", false));
/// ```
pub fn bool_arg(inputs: &[Input], key: &str, default: bool) -> bool {
    inputs
        .iter()
        .rev()
        .filter(|input| input.matches(key))
        .find_map(|input| parse_bool(&input.value).ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_first_equals() {
        let input: Input = "Note=a=b=c".parse().unwrap();
        assert_eq!(input, Input::new("Note", "a=b=c"));
    }

    #[test]
    fn trims_key_but_not_value() {
        let input: Input = " Name = Bob ".parse().unwrap();
        assert_eq!(input.key, "Name");
        assert_eq!(input.value, " Bob ");
    }

    #[test]
    fn empty_value_is_allowed() {
        let input: Input = "Email=".parse().unwrap();
        assert_eq!(input, Input::new("Email", ""));
    }

    #[test]
    fn rejects_missing_equals_and_empty_key() {
        for arg in ["novalue", "=value", "  =value", ""] {
            let err = arg.parse::<Input>().unwrap_err();
            assert_eq!(
                err,
                BindError::MalformedArgument {
                    arg: arg.to_string()
                },
                "{arg:?}"
            );
        }
    }

    #[test]
    fn parse_args_keeps_order_and_fails_fast() {
        let inputs = parse_args(&["b=2", "a=1"]).unwrap();
        assert_eq!(inputs[0].key, "b");
        assert_eq!(inputs[1].key, "a");

        let err = parse_args(&["a=1", "oops", "also-bad"]).unwrap_err();
        assert_eq!(err.to_string(), "invalid argument \"oops\": expected key=value");
    }

    #[test]
    fn parse_args_accepts_owned_strings() {
        let args = vec![String::from("x=1")];
        assert_eq!(parse_args(args.as_slice()).unwrap(), [Input::new("x", "1")]);
    }

    #[test]
    fn display_round_trips() {
        let input = Input::new("Name", "Bob");
        assert_eq!(input.to_string(), "Name=Bob");
        assert_eq!(input.to_string().parse::<Input>().unwrap(), input);
    }

    #[test]
    fn find_input_prefers_last() {
        let inputs = [Input::new("Name", "first"), Input::new("NAME", "second")];
        assert_eq!(find_input(&inputs, "name").unwrap().value, "second");
        assert!(find_input(&inputs, "email").is_none());
    }

    #[test]
    fn bool_arg_rejects_shorthand_and_prefers_later_values() {
        for shorthand in ["1", "0", "t", "T", "f", "F"] {
            assert!(bool_arg(&[Input::new("flag", shorthand)], "flag", true), "{shorthand}");
            assert!(!bool_arg(&[Input::new("flag", shorthand)], "flag", false), "{shorthand}");
        }
        let inputs = [Input::new("Flag", "true"), Input::new("FLAG", "False")];
        assert!(!bool_arg(&inputs, "flag", true));
    }

    #[test]
    fn bool_arg_skips_unparsable_values() {
        let inputs = [Input::new("flag", "false"), Input::new("flag", "maybe")];
        assert!(!bool_arg(&inputs, "flag", true));
        assert!(bool_arg(&[Input::new("flag", "maybe")], "flag", true));
        assert!(bool_arg(&[], "flag", true));
    }
}
