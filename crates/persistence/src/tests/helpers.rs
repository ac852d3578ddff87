// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDate;
use duty_roster_domain::{Assignment, Person, PersonId, RosterConfig, Team};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counter for generating unique test directories.
///
/// This ensures deterministic test isolation by eliminating time-based
/// collisions. Each call to `unique_test_dir()` receives a unique
/// sequential ID.
static DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A guard that removes its directory when dropped, so failed tests do
/// not accumulate state under the system temp directory.
pub struct TestDir {
    path: PathBuf,
}

impl TestDir {
    pub fn path(&self) -> PathBuf {
        self.path.clone()
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

pub fn unique_test_dir() -> TestDir {
    let id: u64 = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    TestDir {
        path: std::env::temp_dir().join(format!(
            "duty-roster-persistence-test-{}-{id}",
            std::process::id()
        )),
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn create_test_config() -> RosterConfig {
    RosterConfig::with_reference_date(date(2025, 4, 3))
}

pub fn create_test_person(id: &str, team: Team) -> Person {
    Person::new(
        PersonId::new(String::from(id)),
        String::from("SGT"),
        String::from("Silva"),
        team,
    )
}

pub fn create_test_days() -> BTreeMap<NaiveDate, Vec<Assignment>> {
    let mut days: BTreeMap<NaiveDate, Vec<Assignment>> = BTreeMap::new();
    days.insert(
        date(2025, 4, 10),
        vec![
            Assignment::new(PersonId::new(String::from("p1")), false),
            Assignment::new(PersonId::new(String::from("p2")), true),
        ],
    );
    days.insert(
        date(2025, 4, 17),
        vec![Assignment::new(PersonId::new(String::from("p1")), false)],
    );
    days
}
