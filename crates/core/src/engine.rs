// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::EngineError;
use crate::repository::Repository;
use crate::store::{PersonPatch, RosterStore};
use chrono::NaiveDate;
use duty_roster_domain::{
    Assignment, BlockReason, ConflictReason, DomainError, Evaluation, Person, PersonId,
    RosterConfig, Team, YearMonth, evaluate_assignment, team_on_duty,
};
use tracing::{debug, info, warn};

/// The outcome of an `assign` call.
///
/// Validation outcomes are routine results, not errors: a blocked or
/// unconfirmed assignment leaves the store untouched and hands the
/// decision back to the caller. Only repository failures and unknown
/// person ids surface as `EngineError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignOutcome {
    /// The assignment was applied and persisted.
    Assigned {
        /// Whether the assignment was recorded over an overridden
        /// soft conflict.
        has_conflict: bool,
    },
    /// A soft conflict exists; re-invoke with `override_conflicts` after
    /// obtaining confirmation.
    ConfirmationRequired(ConflictReason),
    /// A hard rule violation; the assignment was not applied.
    Blocked(BlockReason),
}

/// A person's standing for a given date, for assignment pickers.
///
/// Every registered person is a candidate; conflicting or exhausted
/// candidates are flagged rather than hidden, matching the override
/// model of the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The candidate person.
    pub person: Person,
    /// Whether the person's own team is on base duty on the date.
    pub on_duty_team: bool,
    /// Whether the person already holds an assignment on the date.
    pub already_assigned: bool,
    /// The person's assignment count in the date's month.
    pub month_count: usize,
    /// Whether the monthly extra-shift limit has been reached.
    pub at_monthly_limit: bool,
}

/// The mutation façade over one roster.
///
/// Owns a `RosterStore` hydrated from the `Repository` at construction.
/// Every mutating operation validates, applies, and persists as a single
/// synchronous step; a failed persistence call rolls the in-memory change
/// back so the store always matches the last known-durable state.
#[derive(Debug)]
pub struct RosterEngine<R: Repository> {
    /// The roster configuration, read-only after construction.
    config: RosterConfig,
    /// The in-memory roster state.
    store: RosterStore,
    /// The durability collaborator.
    repository: R,
}

impl<R: Repository> RosterEngine<R> {
    /// Opens an engine over the given repository, loading the person set
    /// and assignment map into memory.
    ///
    /// # Errors
    ///
    /// Returns an error if either load fails.
    pub fn open(config: RosterConfig, repository: R) -> Result<Self, EngineError> {
        let persons: Vec<Person> = repository.load_persons()?;
        let days = repository.load_assignments()?;
        let store: RosterStore = RosterStore::from_parts(persons, days);
        info!(
            persons = store.person_count(),
            assignments = store.assignment_count(),
            "Opened roster engine"
        );
        Ok(Self {
            config,
            store,
            repository,
        })
    }

    /// Returns the roster configuration.
    #[must_use]
    pub const fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Returns the current roster state for read queries.
    #[must_use]
    pub const fn store(&self) -> &RosterStore {
        &self.store
    }

    /// Returns the team on base duty for the given date.
    #[must_use]
    pub fn duty_team(&self, date: NaiveDate) -> Team {
        team_on_duty(&self.config, date)
    }

    /// Proposes an extra-duty assignment for `(date, person)`.
    ///
    /// Runs the validator against current state. Blocked and
    /// confirmation-required outcomes return without mutating; allowed
    /// outcomes (including accepted conflicts) are applied to the store
    /// and persisted.
    ///
    /// # Arguments
    ///
    /// * `date` - The date of the proposed assignment
    /// * `person_id` - The person to assign
    /// * `override_conflicts` - Whether soft conflicts are accepted
    ///
    /// # Errors
    ///
    /// Returns an error if the person does not exist or if persistence
    /// fails (in which case the in-memory change is rolled back).
    pub fn assign(
        &mut self,
        date: NaiveDate,
        person_id: &PersonId,
        override_conflicts: bool,
    ) -> Result<AssignOutcome, EngineError> {
        let person: Person = self
            .store
            .person(person_id)
            .ok_or_else(|| DomainError::PersonNotFound(person_id.clone()))?
            .clone();

        let month_count: usize = self
            .store
            .count_assignments_in_month(person_id, YearMonth::of(date));
        let evaluation: Evaluation = evaluate_assignment(
            &self.config,
            &person,
            date,
            self.store.assignments_on(date),
            month_count,
            override_conflicts,
        );

        match evaluation {
            Evaluation::Blocked(reason) => {
                debug!(%date, person = %person_id, %reason, "Assignment blocked");
                Ok(AssignOutcome::Blocked(reason))
            }
            Evaluation::ConfirmationRequired(reason) => {
                debug!(%date, person = %person_id, %reason, "Assignment requires confirmation");
                Ok(AssignOutcome::ConfirmationRequired(reason))
            }
            Evaluation::Allowed { has_conflict } => {
                self.store
                    .push_assignment(date, Assignment::new(person_id.clone(), has_conflict));
                if let Err(err) = self.repository.save_assignments(self.store.days()) {
                    warn!(%date, person = %person_id, error = %err, "Rolling back assignment");
                    let _ = self.store.take_assignment(date, person_id);
                    return Err(EngineError::Repository(err));
                }
                info!(%date, person = %person_id, has_conflict, "Assignment recorded");
                Ok(AssignOutcome::Assigned { has_conflict })
            }
        }
    }

    /// Removes a person's assignment on a date, if present.
    ///
    /// There is no validator for removal; removing an absent assignment
    /// is a no-op returning `false`.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails; the assignment is restored
    /// at its original list position.
    pub fn unassign(
        &mut self,
        date: NaiveDate,
        person_id: &PersonId,
    ) -> Result<bool, EngineError> {
        let Some((index, assignment)) = self.store.take_assignment(date, person_id) else {
            return Ok(false);
        };

        if let Err(err) = self.repository.save_assignments(self.store.days()) {
            warn!(%date, person = %person_id, error = %err, "Rolling back unassignment");
            self.store.restore_assignment(date, index, assignment);
            return Err(EngineError::Repository(err));
        }
        info!(%date, person = %person_id, "Assignment removed");
        Ok(true)
    }

    /// Adds a new person and persists the person set.
    ///
    /// # Errors
    ///
    /// Returns an error if the rank or name is empty, or if persistence
    /// fails (in which case the person is removed again).
    pub fn add_person(
        &mut self,
        rank: String,
        name: String,
        team: Team,
    ) -> Result<Person, EngineError> {
        let person: Person = self.store.add_person(rank, name, team)?;

        if let Err(err) = self.repository.save_persons(self.store.persons()) {
            warn!(person = %person.id, error = %err, "Rolling back person creation");
            self.store.remove_person(&person.id);
            return Err(EngineError::Repository(err));
        }
        info!(person = %person.id, team = %person.team, "Person added");
        Ok(person)
    }

    /// Merges a patch into a person record and persists the person set.
    ///
    /// A team transfer does not touch historical assignments or their
    /// conflict flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the person does not exist, a patched field is
    /// empty, or persistence fails (in which case the previous record is
    /// restored).
    pub fn update_person(
        &mut self,
        person_id: &PersonId,
        patch: PersonPatch,
    ) -> Result<Person, EngineError> {
        let previous: Person = self
            .store
            .person(person_id)
            .ok_or_else(|| DomainError::PersonNotFound(person_id.clone()))?
            .clone();
        let updated: Person = self.store.update_person(person_id, patch)?;

        if let Err(err) = self.repository.save_persons(self.store.persons()) {
            warn!(person = %person_id, error = %err, "Rolling back person update");
            self.store.replace_person(previous);
            return Err(EngineError::Repository(err));
        }
        info!(person = %person_id, "Person updated");
        Ok(updated)
    }

    /// Deletes a person, cascading through every date's assignment list,
    /// and persists both the person set and the assignment map.
    ///
    /// Returns `false` without persisting if the id did not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if either save fails; the full pre-delete state
    /// is restored.
    pub fn delete_person(&mut self, person_id: &PersonId) -> Result<bool, EngineError> {
        let snapshot: RosterStore = self.store.clone();
        if !self.store.remove_person(person_id) {
            return Ok(false);
        }

        let result: Result<(), _> = self
            .repository
            .save_persons(self.store.persons())
            .and_then(|()| self.repository.save_assignments(self.store.days()));
        if let Err(err) = result {
            warn!(person = %person_id, error = %err, "Rolling back person deletion");
            self.store.restore(snapshot);
            return Err(EngineError::Repository(err));
        }
        info!(person = %person_id, "Person deleted");
        Ok(true)
    }

    /// Lists every person's standing for the given date.
    ///
    /// The list is open to all persons; duty-team membership, existing
    /// assignments, and exhausted monthly limits are reported as flags so
    /// a caller can warn or disable rather than hide.
    #[must_use]
    pub fn candidates_for(&self, date: NaiveDate) -> Vec<Candidate> {
        let duty_team: Team = self.duty_team(date);
        let month: YearMonth = YearMonth::of(date);
        let day = self.store.assignments_on(date);

        self.store
            .persons()
            .iter()
            .map(|person| {
                let month_count: usize =
                    self.store.count_assignments_in_month(&person.id, month);
                Candidate {
                    on_duty_team: person.team == duty_team,
                    already_assigned: day
                        .iter()
                        .any(|assignment| assignment.person_id == person.id),
                    month_count,
                    at_monthly_limit: month_count >= self.config.max_extra_shifts(),
                    person: person.clone(),
                }
            })
            .collect()
    }
}
