// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Property schema: [`Property`] and the ordered [`Properties`] collection.
//!
//! A schema is built once per command, usually starting from
//! [`get_properties`](crate::get_properties), then adjusted and sorted:
//!
//! ```rust
//! use propbind_core::{Properties, Property};
//!
//! let mut schema = Properties::try_from(vec![
//!     Property::new("Name"),
//!     Property::new("Currency"),
//!     Property::required("Email"),
//! ])
//! .unwrap();
//!
//! schema.set_default("Currency", "USD").unwrap();
//! schema.sort(true, true);
//!
//! let names: Vec<_> = schema.iter().map(|p| p.name.as_str()).collect();
//! assert_eq!(names, ["Email", "Currency", "Name"]);
//! ```
//!
//! All lookups are case-insensitive; names keep the case they were declared
//! with for display. Every way of building or editing a schema keeps names
//! unique under that comparison: construction goes through
//! [`Properties::push`], and [`PropertyMut`] has no way to rename an entry.

use std::{cmp::Ordering, ops::Deref};

use tracing::warn;

use crate::error::{BindError, Result};

/// One schema entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Property {
    /// Canonical name, matched against field names and input keys.
    pub name:     String,
    /// Binding fails when no input (and no default) is present.
    pub required: bool,
    /// Text used when the user supplies nothing.
    pub default:  Option<String>
}

impl Property {
    /// Optional property without a default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:     name.into(),
            required: false,
            default:  None
        }
    }

    /// Required property without a default.
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            required: true,
            ..Self::new(name)
        }
    }

    /// Set the default text.
    #[must_use]
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Case-insensitive name comparison.
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Ordered, name-unique collection of [`Property`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Properties(Vec<Property>);

impl Properties {
    /// Empty schema.
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the schema has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in schema order.
    pub fn iter(&self) -> std::slice::Iter<'_, Property> {
        self.0.iter()
    }

    /// Entries as a slice.
    pub fn as_slice(&self) -> &[Property] {
        &self.0
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&Property> {
        self.0.iter().find(|p| p.matches(name))
    }

    /// Case-insensitive mutable lookup.
    ///
    /// The returned handle edits `required` and `default`; the name is
    /// read-only.
    ///
    /// ```rust
    /// use propbind_core::{Properties, Property};
    ///
    /// let mut schema = Properties::try_from(vec![Property::new("TimeZone")]).unwrap();
    /// if let Some(mut tz) = schema.get_mut("timezone") {
    ///     tz.set_default("UTC");
    /// }
    /// assert_eq!(schema.get("TimeZone").unwrap().default.as_deref(), Some("UTC"));
    /// ```
    pub fn get_mut(&mut self, name: &str) -> Option<PropertyMut<'_>> {
        self.0.iter_mut().find(|p| p.matches(name)).map(PropertyMut)
    }

    /// Append an entry.
    ///
    /// # Errors
    ///
    /// [`BindError::DuplicateProperty`] when a property with the same name
    /// (ignoring case) is already present.
    pub fn push(&mut self, property: Property) -> Result<()> {
        if self.get(&property.name).is_some() {
            return Err(BindError::DuplicateProperty {
                name: property.name
            });
        }
        self.0.push(property);
        Ok(())
    }

    /// Build a schema from entries, rejecting duplicates like [`push`](Self::push).
    ///
    /// # Errors
    ///
    /// [`BindError::DuplicateProperty`] naming the first repeated entry.
    pub fn try_from_iter<I>(iter: I) -> Result<Self>
    where
        I: IntoIterator<Item = Property>
    {
        let iter = iter.into_iter();
        let mut schema = Self(Vec::with_capacity(iter.size_hint().0));
        for property in iter {
            schema.push(property)?;
        }
        Ok(schema)
    }

    /// Build a schema, dropping entries whose name is already present.
    pub(crate) fn from_iter_dedup<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Property>
    {
        let mut schema = Self::new();
        for property in iter {
            if let Err(err) = schema.push(property) {
                warn!(error = %err, "dropping repeated property");
            }
        }
        schema
    }

    /// Remove and return the entry matching `name`.
    pub fn remove(&mut self, name: &str) -> Option<Property> {
        let index = self.0.iter().position(|p| p.matches(name))?;
        Some(self.0.remove(index))
    }

    /// Set the default text of an existing entry.
    ///
    /// # Errors
    ///
    /// [`BindError::PropertyNotFound`] when `name` is absent.
    pub fn set_default(&mut self, name: &str, value: impl Into<String>) -> Result<&mut Self> {
        self.lookup_mut(name)?.default = Some(value.into());
        Ok(self)
    }

    /// Mark an existing entry as required or optional.
    ///
    /// # Errors
    ///
    /// [`BindError::PropertyNotFound`] when `name` is absent.
    pub fn set_required(&mut self, name: &str, required: bool) -> Result<&mut Self> {
        self.lookup_mut(name)?.required = required;
        Ok(self)
    }

    /// Stable in-place reorder.
    ///
    /// With `required_first`, required entries come before optional ones.
    /// With `alphabetical`, entries within the same group are ordered by
    /// name, ignoring case. Entries that compare equal keep their current
    /// relative order.
    pub fn sort(&mut self, required_first: bool, alphabetical: bool) {
        self.0.sort_by(|a, b| {
            let group = if required_first {
                b.required.cmp(&a.required)
            } else {
                Ordering::Equal
            };
            group.then_with(|| {
                if alphabetical {
                    compare_names(&a.name, &b.name)
                } else {
                    Ordering::Equal
                }
            })
        });
    }

    fn lookup_mut(&mut self, name: &str) -> Result<&mut Property> {
        self.0
            .iter_mut()
            .find(|p| p.matches(name))
            .ok_or_else(|| BindError::PropertyNotFound {
                name: name.to_string()
            })
    }
}

/// Mutable handle to one schema entry, returned by [`Properties::get_mut`].
///
/// Reads go through `Deref<Target = Property>`. Only `required` and
/// `default` can be changed, so the schema stays name-unique.
#[derive(Debug)]
pub struct PropertyMut<'a>(&'a mut Property);

impl PropertyMut<'_> {
    /// Mark the entry as required or optional.
    pub fn set_required(&mut self, required: bool) -> &mut Self {
        self.0.required = required;
        self
    }

    /// Set the default text.
    pub fn set_default(&mut self, value: impl Into<String>) -> &mut Self {
        self.0.default = Some(value.into());
        self
    }

    /// Drop the default text.
    pub fn clear_default(&mut self) -> &mut Self {
        self.0.default = None;
        self
    }
}

impl Deref for PropertyMut<'_> {
    type Target = Property;

    fn deref(&self) -> &Property {
        &*self.0
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = a
        .bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()));
    folded.then_with(|| a.cmp(b))
}

impl TryFrom<Vec<Property>> for Properties {
    type Error = BindError;

    fn try_from(properties: Vec<Property>) -> Result<Self> {
        Self::try_from_iter(properties)
    }
}

impl IntoIterator for Properties {
    type Item = Property;
    type IntoIter = std::vec::IntoIter<Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Properties {
    type Item = &'a Property;
    type IntoIter = std::slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
