// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use propbind::{
    Bindable, FieldKind, Identifier, Properties, Property,
    chrono::{DateTime, Utc},
    load_args
};

#[derive(Bindable, Default)]
pub struct Payment {
    pub payment_id:     Option<Identifier>,
    pub effective_date: Option<DateTime<Utc>>,
    pub is_external:    Option<bool>,
    pub attempts:       Option<u32>
}

fn main() {
    for field in Payment::FIELDS {
        assert!(field.optional, "{}", field.name);
    }
    assert_eq!(Payment::FIELDS[0].kind, FieldKind::Identifier);
    assert_eq!(Payment::FIELDS[1].kind, FieldKind::Timestamp);

    let schema = Properties::try_from(vec![
        Property::new("payment_id"),
        Property::new("effective_date"),
        Property::new("is_external"),
        Property::new("attempts"),
    ])
    .unwrap();
    let mut payment = Payment::default();
    load_args(&mut payment, &schema, &["payment_id=p-1", "is_external=FALSE"]).unwrap();
    assert_eq!(payment.payment_id.as_ref().map(Identifier::as_str), Some("p-1"));
    assert_eq!(payment.is_external, Some(false));
    assert!(payment.effective_date.is_none());
    assert!(payment.attempts.is_none());
}
