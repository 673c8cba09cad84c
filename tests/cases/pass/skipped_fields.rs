// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use propbind::Bindable;

#[derive(Bindable, Default)]
pub struct Tenant {
    pub api_key:      String,
    #[property(skip)]
    pub cache:        HashMap<String, String>,
    pub(crate) label: String,
    secret:           String
}

impl Tenant {
    fn secret(&self) -> &str {
        &self.secret
    }
}

fn main() {
    let names: Vec<_> = Tenant::FIELDS.iter().map(|f| f.name).collect();
    assert_eq!(names, ["api_key", "label"]);
    assert!(Tenant::field("CACHE").is_none());
    assert_eq!(Tenant::default().secret(), "");
}
