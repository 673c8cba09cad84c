// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use propbind::{Bindable, FieldKind, Input, Properties, Property, load_properties};

#[derive(Bindable, Default)]
pub struct Account {
    pub name:       String,
    pub is_default: bool,
    pub balance:    i64
}

fn main() {
    assert_eq!(Account::FIELDS.len(), 3);
    assert_eq!(Account::FIELDS[0].name, "name");
    assert_eq!(Account::FIELDS[1].kind, FieldKind::Boolean);
    assert_eq!(Account::FIELDS[2].kind, FieldKind::Integer);

    let schema = Properties::try_from(vec![
        Property::required("name"),
        Property::new("balance"),
    ])
    .unwrap();
    let mut account = Account::default();
    load_properties(&mut account, &schema, &[
        Input::new("NAME", "acme"),
        Input::new("balance", "42")
    ])
    .unwrap();
    assert_eq!(account.name, "acme");
    assert_eq!(account.balance, 42);
    assert!(!account.is_default);
}
