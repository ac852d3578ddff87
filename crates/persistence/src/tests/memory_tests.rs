// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::MemoryRepository;
use crate::tests::helpers::{create_test_days, create_test_person};
use duty_roster::{Repository, RepositoryError};
use duty_roster_domain::Team;

#[test]
fn test_state_round_trips_through_memory() {
    let mut repository: MemoryRepository = MemoryRepository::new();
    let persons = vec![create_test_person("p1", Team::Charlie)];
    let days = create_test_days();

    repository.save_persons(&persons).unwrap();
    repository.save_assignments(&days).unwrap();

    assert_eq!(repository.load_persons().unwrap(), persons);
    assert_eq!(repository.load_assignments().unwrap(), days);
}

#[test]
fn test_with_state_seeds_loads() {
    let persons = vec![create_test_person("p1", Team::Alfa)];
    let days = create_test_days();
    let repository: MemoryRepository = MemoryRepository::with_state(persons.clone(), days.clone());

    assert_eq!(repository.load_persons().unwrap(), persons);
    assert_eq!(repository.load_assignments().unwrap(), days);
}

#[test]
fn test_fail_writes_switch_rejects_saves_and_keeps_state() {
    let persons = vec![create_test_person("p1", Team::Alfa)];
    let mut repository: MemoryRepository =
        MemoryRepository::with_state(persons.clone(), create_test_days());
    repository.set_fail_writes(true);

    let result = repository.save_persons(&[]);
    assert!(matches!(result, Err(RepositoryError::WriteFailed(_))));
    assert_eq!(repository.persons(), persons.as_slice());

    repository.set_fail_writes(false);
    repository.save_persons(&[]).unwrap();
    assert!(repository.persons().is_empty());
}
