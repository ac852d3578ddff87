// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Person, PersonId, RosterConfig, Team};
use chrono::NaiveDate;

/// The well-known deployment anchor: 2025-04-03, the day BRAVO takes over.
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 3).unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn create_test_config() -> RosterConfig {
    RosterConfig::with_reference_date(reference_date())
}

pub fn create_test_person(id: &str, team: Team) -> Person {
    Person::new(
        PersonId::new(String::from(id)),
        String::from("SGT"),
        String::from("Test Person"),
        team,
    )
}
