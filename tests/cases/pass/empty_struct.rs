// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use propbind::{Bindable, Properties, generate_usage_string, get_properties};

#[derive(Bindable, Default)]
pub struct Nothing {}

fn main() {
    assert!(Nothing::FIELDS.is_empty());
    assert!(get_properties::<Nothing>().is_empty());
    assert_eq!(generate_usage_string::<Nothing>(&Properties::new()), "");
}
