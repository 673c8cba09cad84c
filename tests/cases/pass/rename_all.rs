// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use propbind::{Bindable, get_properties};

#[derive(Bindable, Default)]
#[bindable(rename_all = "PascalCase")]
pub struct Subscription {
    #[property(rename = "SubscriptionID")]
    pub subscription_id:  String,
    pub plan_name:        String,
    pub billing_period:   Option<String>
}

#[derive(Bindable, Default)]
#[bindable(rename_all = "kebab-case")]
pub struct Flags {
    pub dry_run: bool
}

fn main() {
    let names: Vec<_> = get_properties::<Subscription>()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, ["SubscriptionID", "PlanName", "BillingPeriod"]);
    assert_eq!(Flags::FIELDS[0].name, "dry-run");
}
