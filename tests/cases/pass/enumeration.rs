// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use propbind::{Bindable, FieldKind, Properties, Property, ValidatedEnum, load_args};

#[derive(Debug, Default, PartialEq)]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Unknown(String)
}

impl ValidatedEnum for Currency {
    fn from_text(text: &str) -> Self {
        match text {
            "USD" => Self::Usd,
            "EUR" => Self::Eur,
            other => Self::Unknown(other.to_string())
        }
    }

    fn is_valid(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

#[derive(Bindable, Default)]
pub struct Account {
    #[property(enumeration)]
    pub currency:  Currency,
    #[property(enumeration)]
    pub fallback:  Option<Currency>
}

fn main() {
    assert_eq!(Account::FIELDS[0].kind, FieldKind::Enum);
    assert!(Account::FIELDS[1].optional);

    let schema = Properties::try_from(vec![
        Property::new("currency"),
        Property::new("fallback"),
    ])
    .unwrap();
    let mut account = Account::default();
    load_args(&mut account, &schema, &["currency=EUR"]).unwrap();
    assert_eq!(account.currency, Currency::Eur);

    let err = load_args(&mut account, &schema, &["fallback=GBP"]).unwrap_err();
    assert_eq!(err.to_string(), "Invalid value GBP for enum");
    assert_eq!(account.fallback, None);
}
