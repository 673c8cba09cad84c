// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use propbind::{
    Bindable, FieldKind, Properties, Property, ValidatedEnum, get_properties, load_args
};

#[derive(Bindable, Default)]
#[bindable(crate = "propbind")]
pub struct Tagged<T> {
    pub tag:   String,
    pub value: Option<T>
}

#[derive(Debug, Default, PartialEq)]
pub struct Level(String);

impl ValidatedEnum for Level {
    fn from_text(text: &str) -> Self {
        Self(text.to_string())
    }

    fn is_valid(&self) -> bool {
        matches!(self.0.as_str(), "low" | "high")
    }
}

#[derive(Bindable, Default)]
pub struct Leveled<E> {
    #[property(enumeration)]
    pub level: E
}

fn main() {
    assert_eq!(Tagged::<i32>::FIELDS[1].kind, FieldKind::Integer);
    assert_eq!(Tagged::<bool>::FIELDS[1].kind, FieldKind::Boolean);

    let schema = Properties::try_from(vec![
        Property::required("tag"),
        Property::new("value"),
    ])
    .unwrap();
    let mut tagged = Tagged::<i32>::default();
    load_args(&mut tagged, &schema, &["tag=limit", "value=-7"]).unwrap();
    assert_eq!(tagged.tag, "limit");
    assert_eq!(tagged.value, Some(-7));

    let mut leveled = Leveled::<Level>::default();
    load_args(&mut leveled, &get_properties::<Leveled<Level>>(), &["level=high"]).unwrap();
    assert_eq!(leveled.level, Level("high".into()));
}
