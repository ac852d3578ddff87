// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Repository, RepositoryError, RosterEngine};
use chrono::NaiveDate;
use duty_roster_domain::{Assignment, Person, RosterConfig};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

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

/// Backing state shared between a test repository and the test body, so
/// tests can inspect persisted data and inject write failures after the
/// engine has taken ownership of the repository.
#[derive(Debug, Default)]
pub struct TestBackend {
    pub persons: Vec<Person>,
    pub days: BTreeMap<NaiveDate, Vec<Assignment>>,
    pub fail_writes: bool,
}

#[derive(Debug, Clone)]
pub struct TestRepository {
    backend: Rc<RefCell<TestBackend>>,
}

impl Repository for TestRepository {
    fn load_persons(&self) -> Result<Vec<Person>, RepositoryError> {
        Ok(self.backend.borrow().persons.clone())
    }

    fn load_assignments(&self) -> Result<BTreeMap<NaiveDate, Vec<Assignment>>, RepositoryError> {
        Ok(self.backend.borrow().days.clone())
    }

    fn save_persons(&mut self, persons: &[Person]) -> Result<(), RepositoryError> {
        let mut backend = self.backend.borrow_mut();
        if backend.fail_writes {
            return Err(RepositoryError::WriteFailed(String::from(
                "injected failure",
            )));
        }
        backend.persons = persons.to_vec();
        Ok(())
    }

    fn save_assignments(
        &mut self,
        assignments: &BTreeMap<NaiveDate, Vec<Assignment>>,
    ) -> Result<(), RepositoryError> {
        let mut backend = self.backend.borrow_mut();
        if backend.fail_writes {
            return Err(RepositoryError::WriteFailed(String::from(
                "injected failure",
            )));
        }
        backend.days = assignments.clone();
        Ok(())
    }
}

pub fn test_repository() -> (TestRepository, Rc<RefCell<TestBackend>>) {
    let backend: Rc<RefCell<TestBackend>> = Rc::new(RefCell::new(TestBackend::default()));
    (
        TestRepository {
            backend: Rc::clone(&backend),
        },
        backend,
    )
}

pub fn open_test_engine() -> (RosterEngine<TestRepository>, Rc<RefCell<TestBackend>>) {
    let (repository, backend) = test_repository();
    let engine: RosterEngine<TestRepository> =
        RosterEngine::open(create_test_config(), repository).unwrap();
    (engine, backend)
}
