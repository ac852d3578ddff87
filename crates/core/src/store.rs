// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDate;
use duty_roster_domain::{
    Assignment, DomainError, Person, PersonId, Team, YearMonth, validate_person_fields,
};
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

/// A partial update to a person record.
///
/// Unset fields are left unchanged. Updating a person's team does not
/// touch existing assignments or their conflict flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonPatch {
    /// New rank label, if changing.
    pub rank: Option<String>,
    /// New display name, if changing.
    pub name: Option<String>,
    /// New team, if transferring.
    pub team: Option<Team>,
}

/// The in-memory roster state: the person set and the per-date
/// assignment lists.
///
/// Persons keep insertion order; assignment lists keep per-date insertion
/// order. A date key is stored only while its list is non-empty, so "no
/// assignments on this day" and "empty list" collapse to absence.
///
/// The store performs field validation only. Business-rule validation
/// (capacity, conflicts) lives in the domain validator, and the
/// post-validation mutation primitives here are crate-private so that all
/// rule enforcement goes through `RosterEngine`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterStore {
    /// All registered persons, in insertion order.
    persons: Vec<Person>,
    /// Assignments keyed by date, each list in insertion order.
    days: BTreeMap<NaiveDate, Vec<Assignment>>,
}

impl RosterStore {
    /// Creates a new empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            persons: Vec::new(),
            days: BTreeMap::new(),
        }
    }

    /// Builds a store from loaded repository state.
    ///
    /// Empty day lists are pruned so the absence invariant holds
    /// regardless of what the backing store returned.
    #[must_use]
    pub fn from_parts(
        persons: Vec<Person>,
        mut days: BTreeMap<NaiveDate, Vec<Assignment>>,
    ) -> Self {
        days.retain(|_, assignments| !assignments.is_empty());
        Self { persons, days }
    }

    /// Adds a new person with a freshly generated identifier.
    ///
    /// # Arguments
    ///
    /// * `rank` - The person's rank label
    /// * `name` - The person's display name
    /// * `team` - The person's team
    ///
    /// # Errors
    ///
    /// Returns an error if the rank or name is empty.
    pub fn add_person(
        &mut self,
        rank: String,
        name: String,
        team: Team,
    ) -> Result<Person, DomainError> {
        validate_person_fields(&rank, &name)?;
        let person: Person = Person::new(
            PersonId::new(Uuid::new_v4().to_string()),
            rank,
            name,
            team,
        );
        self.persons.push(person.clone());
        Ok(person)
    }

    /// Merges a patch into an existing person record.
    ///
    /// # Errors
    ///
    /// Returns an error if the person does not exist, or if a patched
    /// rank or name is empty.
    pub fn update_person(
        &mut self,
        id: &PersonId,
        patch: PersonPatch,
    ) -> Result<Person, DomainError> {
        let person: &mut Person = self
            .persons
            .iter_mut()
            .find(|person| &person.id == id)
            .ok_or_else(|| DomainError::PersonNotFound(id.clone()))?;

        let rank: String = patch.rank.unwrap_or_else(|| person.rank.clone());
        let name: String = patch.name.unwrap_or_else(|| person.name.clone());
        validate_person_fields(&rank, &name)?;

        person.rank = rank;
        person.name = name;
        if let Some(team) = patch.team {
            person.team = team;
        }
        Ok(person.clone())
    }

    /// Removes a person, cascading through every date's assignment list.
    ///
    /// Dates left with an empty list are pruned. Returns `false` if the
    /// id did not exist; removing an unknown person is a no-op.
    pub fn remove_person(&mut self, id: &PersonId) -> bool {
        let before: usize = self.persons.len();
        self.persons.retain(|person| &person.id != id);
        if self.persons.len() == before {
            return false;
        }

        self.days
            .retain(|_, assignments| {
                assignments.retain(|assignment| &assignment.person_id != id);
                !assignments.is_empty()
            });
        true
    }

    /// Returns the person with the given id, if any.
    #[must_use]
    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.persons.iter().find(|person| &person.id == id)
    }

    /// Returns all persons in insertion order.
    #[must_use]
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    /// Returns the assignment list for a date, empty if none.
    #[must_use]
    pub fn assignments_on(&self, date: NaiveDate) -> &[Assignment] {
        self.days.get(&date).map_or(&[], Vec::as_slice)
    }

    /// Returns the full date-to-assignment-list map.
    #[must_use]
    pub const fn days(&self) -> &BTreeMap<NaiveDate, Vec<Assignment>> {
        &self.days
    }

    /// Counts the dates within a month on which the person holds an
    /// assignment.
    #[must_use]
    pub fn count_assignments_in_month(&self, id: &PersonId, month: YearMonth) -> usize {
        self.days
            .range(month.first_day()..=month.last_day())
            .filter(|(_, assignments)| {
                assignments
                    .iter()
                    .any(|assignment| &assignment.person_id == id)
            })
            .count()
    }

    /// Returns the person's closest assignment date at or before the
    /// given date.
    #[must_use]
    pub fn last_assignment_on_or_before(
        &self,
        id: &PersonId,
        date: NaiveDate,
    ) -> Option<NaiveDate> {
        self.days
            .range(..=date)
            .rev()
            .find(|(_, assignments)| {
                assignments
                    .iter()
                    .any(|assignment| &assignment.person_id == id)
            })
            .map(|(day, _)| *day)
    }

    /// Returns the person's closest assignment date strictly after the
    /// given date.
    #[must_use]
    pub fn next_assignment_after(&self, id: &PersonId, date: NaiveDate) -> Option<NaiveDate> {
        use std::ops::Bound::{Excluded, Unbounded};
        self.days
            .range((Excluded(date), Unbounded))
            .find(|(_, assignments)| {
                assignments
                    .iter()
                    .any(|assignment| &assignment.person_id == id)
            })
            .map(|(day, _)| *day)
    }

    /// Aggregates assignment counts per team for one month.
    ///
    /// Each assignment counts toward the assigned person's *current*
    /// team, not the team on base duty that day. Teams in scope are
    /// preset to zero so reports always show every team.
    #[must_use]
    pub fn team_counts(&self, month: YearMonth, filter: Option<Team>) -> BTreeMap<Team, usize> {
        let mut counts: BTreeMap<Team, usize> = Team::ALL
            .into_iter()
            .filter(|team| filter.is_none_or(|wanted| wanted == *team))
            .map(|team| (team, 0))
            .collect();

        for (_, assignments) in self.days.range(month.first_day()..=month.last_day()) {
            for assignment in assignments {
                let Some(person) = self.person(&assignment.person_id) else {
                    continue;
                };
                if let Some(count) = counts.get_mut(&person.team) {
                    *count += 1;
                }
            }
        }
        counts
    }

    /// Returns every month that holds at least one assignment, ascending.
    #[must_use]
    pub fn months_with_assignments(&self) -> Vec<YearMonth> {
        let months: BTreeSet<YearMonth> = self.days.keys().map(|day| YearMonth::of(*day)).collect();
        months.into_iter().collect()
    }

    /// Returns the number of registered persons.
    #[must_use]
    pub fn person_count(&self) -> usize {
        self.persons.len()
    }

    /// Returns the total number of assignments across all dates.
    #[must_use]
    pub fn assignment_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// Returns the number of assignments recorded with a conflict flag.
    #[must_use]
    pub fn conflict_count(&self) -> usize {
        self.days
            .values()
            .flatten()
            .filter(|assignment| assignment.has_conflict)
            .count()
    }

    /// Appends a validated assignment to a date's list.
    pub(crate) fn push_assignment(&mut self, date: NaiveDate, assignment: Assignment) {
        self.days.entry(date).or_default().push(assignment);
    }

    /// Removes a person's assignment from a date's list, returning the
    /// removed assignment and its list position for rollback.
    pub(crate) fn take_assignment(
        &mut self,
        date: NaiveDate,
        id: &PersonId,
    ) -> Option<(usize, Assignment)> {
        let assignments: &mut Vec<Assignment> = self.days.get_mut(&date)?;
        let index: usize = assignments
            .iter()
            .position(|assignment| &assignment.person_id == id)?;
        let assignment: Assignment = assignments.remove(index);
        if assignments.is_empty() {
            self.days.remove(&date);
        }
        Some((index, assignment))
    }

    /// Reinserts an assignment at its original list position.
    pub(crate) fn restore_assignment(
        &mut self,
        date: NaiveDate,
        index: usize,
        assignment: Assignment,
    ) {
        let assignments: &mut Vec<Assignment> = self.days.entry(date).or_default();
        let position: usize = index.min(assignments.len());
        assignments.insert(position, assignment);
    }

    /// Overwrites a person record in place, preserving insertion order.
    pub(crate) fn replace_person(&mut self, person: Person) {
        if let Some(slot) = self
            .persons
            .iter_mut()
            .find(|existing| existing.id == person.id)
        {
            *slot = person;
        }
    }

    /// Restores the store to a previously captured state.
    pub(crate) fn restore(&mut self, snapshot: Self) {
        *self = snapshot;
    }
}
