// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use propbind::Bindable;

#[derive(Bindable)]
pub enum Mode {
    Fast,
    Slow
}

fn main() {}
