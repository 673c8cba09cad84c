// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use propbind::Bindable;

#[derive(Bindable)]
pub struct Pair(pub String, pub String);

fn main() {}
