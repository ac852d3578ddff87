// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only report queries over roster state.
//!
//! Every function here is a pure function of the current `RosterStore`
//! contents: no persistence, no clock, no side effects. Conflict flags
//! recorded at assignment time surface here for audit.

use crate::store::RosterStore;
use chrono::NaiveDate;
use duty_roster_domain::{Person, Team, YearMonth};

/// Roster-wide totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterSummary {
    /// Number of registered persons.
    pub person_count: usize,
    /// Total assignments across all dates.
    pub assignment_count: usize,
    /// Assignments recorded over an overridden soft conflict.
    pub conflict_count: usize,
}

/// One row of the per-team monthly report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamReportRow {
    /// The team.
    pub team: Team,
    /// Number of current members.
    pub member_count: usize,
    /// Assignments held by current members within the month.
    pub month_assignments: usize,
    /// The most recent date on which a current member held an
    /// assignment, across all months.
    pub last_assignment: Option<NaiveDate>,
}

/// One row of the per-person report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonReportRow {
    /// The person.
    pub person: Person,
    /// The person's total assignment count across all dates.
    pub total_assignments: usize,
}

/// One entry of the monthly schedule listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    /// The assignment date.
    pub date: NaiveDate,
    /// The assigned person.
    pub person: Person,
    /// Whether the assignment was recorded over a conflict.
    pub has_conflict: bool,
}

/// Computes roster-wide totals.
#[must_use]
pub fn summarize(store: &RosterStore) -> RosterSummary {
    RosterSummary {
        person_count: store.person_count(),
        assignment_count: store.assignment_count(),
        conflict_count: store.conflict_count(),
    }
}

/// Builds the per-team report for one month.
///
/// Counts follow each assigned person's *current* team. With a filter,
/// only that team's row is produced.
#[must_use]
pub fn team_report(
    store: &RosterStore,
    month: YearMonth,
    filter: Option<Team>,
) -> Vec<TeamReportRow> {
    let month_counts = store.team_counts(month, filter);

    Team::ALL
        .into_iter()
        .filter(|team| filter.is_none_or(|wanted| wanted == *team))
        .map(|team| TeamReportRow {
            team,
            member_count: store
                .persons()
                .iter()
                .filter(|person| person.team == team)
                .count(),
            month_assignments: month_counts.get(&team).copied().unwrap_or(0),
            last_assignment: last_team_assignment(store, team),
        })
        .collect()
}

/// Returns the most recent date on which a current member of the team
/// held an assignment.
fn last_team_assignment(store: &RosterStore, team: Team) -> Option<NaiveDate> {
    store
        .days()
        .iter()
        .rev()
        .find(|(_, assignments)| {
            assignments.iter().any(|assignment| {
                store
                    .person(&assignment.person_id)
                    .is_some_and(|person| person.team == team)
            })
        })
        .map(|(date, _)| *date)
}

/// Builds the per-person report, optionally restricted to one team.
///
/// Rows keep person insertion order.
#[must_use]
pub fn person_report(store: &RosterStore, filter: Option<Team>) -> Vec<PersonReportRow> {
    store
        .persons()
        .iter()
        .filter(|person| filter.is_none_or(|wanted| wanted == person.team))
        .map(|person| PersonReportRow {
            person: person.clone(),
            total_assignments: store
                .days()
                .values()
                .flatten()
                .filter(|assignment| assignment.person_id == person.id)
                .count(),
        })
        .collect()
}

/// Lists every assignment within one month, sorted by date with per-day
/// insertion order preserved, optionally restricted to one team.
///
/// Assignments whose person no longer exists are skipped; the cascade on
/// person deletion makes that case unreachable in a consistent store.
#[must_use]
pub fn month_schedule(
    store: &RosterStore,
    month: YearMonth,
    filter: Option<Team>,
) -> Vec<ScheduleEntry> {
    store
        .days()
        .range(month.first_day()..=month.last_day())
        .flat_map(|(date, assignments)| {
            assignments.iter().filter_map(|assignment| {
                let person: &Person = store.person(&assignment.person_id)?;
                if filter.is_none_or(|wanted| wanted == person.team) {
                    Some(ScheduleEntry {
                        date: *date,
                        person: person.clone(),
                        has_conflict: assignment.has_conflict,
                    })
                } else {
                    None
                }
            })
        })
        .collect()
}
