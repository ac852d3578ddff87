// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDate;
use duty_roster::{Repository, RepositoryError};
use duty_roster_domain::{Assignment, Person};
use std::collections::BTreeMap;
use tracing::debug;

/// A volatile in-memory `Repository`.
///
/// Useful for hosts that do not need durability and for tests. The
/// `fail_writes` switch makes every save fail, which exercises the
/// engine's rollback paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    persons: Vec<Person>,
    days: BTreeMap<NaiveDate, Vec<Assignment>>,
    fail_writes: bool,
}

impl MemoryRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-seeded with state.
    #[must_use]
    pub const fn with_state(
        persons: Vec<Person>,
        days: BTreeMap<NaiveDate, Vec<Assignment>>,
    ) -> Self {
        Self {
            persons,
            days,
            fail_writes: false,
        }
    }

    /// Makes every subsequent save fail with `WriteFailed`.
    pub const fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Returns the currently stored person set.
    #[must_use]
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    /// Returns the currently stored assignment map.
    #[must_use]
    pub const fn days(&self) -> &BTreeMap<NaiveDate, Vec<Assignment>> {
        &self.days
    }
}

impl Repository for MemoryRepository {
    fn load_persons(&self) -> Result<Vec<Person>, RepositoryError> {
        Ok(self.persons.clone())
    }

    fn load_assignments(&self) -> Result<BTreeMap<NaiveDate, Vec<Assignment>>, RepositoryError> {
        Ok(self.days.clone())
    }

    fn save_persons(&mut self, persons: &[Person]) -> Result<(), RepositoryError> {
        if self.fail_writes {
            return Err(RepositoryError::WriteFailed(String::from(
                "memory repository configured to fail writes",
            )));
        }
        self.persons = persons.to_vec();
        debug!(count = self.persons.len(), "Person set saved");
        Ok(())
    }

    fn save_assignments(
        &mut self,
        assignments: &BTreeMap<NaiveDate, Vec<Assignment>>,
    ) -> Result<(), RepositoryError> {
        if self.fail_writes {
            return Err(RepositoryError::WriteFailed(String::from(
                "memory repository configured to fail writes",
            )));
        }
        self.days = assignments.clone();
        debug!(dates = self.days.len(), "Assignment map saved");
        Ok(())
    }
}
