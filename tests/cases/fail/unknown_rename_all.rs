// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use propbind::Bindable;

#[derive(Bindable)]
#[bindable(rename_all = "SpongeCase")]
pub struct Account {
    pub name: String
}

fn main() {}
