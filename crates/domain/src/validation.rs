// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Extra-duty assignment validation.
//!
//! A proposed `(date, person)` assignment is evaluated against the current
//! day list and month count in a fixed precedence order. The outcome is a
//! tagged result, never an error: hard blocks (duplicate, daily capacity)
//! can never be overridden, while soft conflicts (own team on duty,
//! monthly limit reached) proceed only with an explicit override and are
//! recorded with a conflict flag for later audit.

use crate::duty_cycle::team_on_duty;
use crate::error::DomainError;
use crate::types::{Assignment, Person, PersonId, RosterConfig, Team, YearMonth};
use chrono::NaiveDate;

/// A rule violation that can never be overridden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockReason {
    /// The person already holds an assignment on the date.
    DuplicateAssignment {
        /// The date of the proposed assignment.
        date: NaiveDate,
        /// The person already assigned.
        person_id: PersonId,
    },
    /// The date already holds the maximum number of assignments.
    DailyCapacityExceeded {
        /// The date of the proposed assignment.
        date: NaiveDate,
        /// The configured daily capacity.
        limit: usize,
    },
}

impl std::fmt::Display for BlockReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateAssignment { date, person_id } => {
                write!(f, "Person {person_id} is already assigned on {date}")
            }
            Self::DailyCapacityExceeded { date, limit } => {
                write!(f, "Date {date} already holds {limit} assignments")
            }
        }
    }
}

/// A rule violation that may proceed with an explicit override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictReason {
    /// The person's own team is on base duty on the date.
    TeamOnDuty {
        /// The date of the proposed assignment.
        date: NaiveDate,
        /// The person being assigned.
        person_id: PersonId,
        /// The team on base duty.
        team: Team,
    },
    /// The person has reached the monthly extra-shift limit.
    MonthlyLimitReached {
        /// The person being assigned.
        person_id: PersonId,
        /// The month of the proposed assignment.
        month: YearMonth,
        /// The configured monthly limit.
        limit: usize,
    },
}

impl std::fmt::Display for ConflictReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TeamOnDuty {
                date,
                person_id,
                team,
            } => {
                write!(
                    f,
                    "Person {person_id} belongs to team {team}, which is on base duty on {date}"
                )
            }
            Self::MonthlyLimitReached {
                person_id,
                month,
                limit,
            } => {
                write!(
                    f,
                    "Person {person_id} has already reached {limit} extra shifts in {month}"
                )
            }
        }
    }
}

/// The outcome of evaluating a proposed assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// The assignment may be applied.
    Allowed {
        /// Whether the assignment proceeds over an overridden soft conflict.
        has_conflict: bool,
    },
    /// A soft conflict exists; the caller must re-submit with an override
    /// to proceed.
    ConfirmationRequired(ConflictReason),
    /// A hard rule violation; the assignment must not be applied.
    Blocked(BlockReason),
}

/// Evaluates a proposed `(date, person)` extra-duty assignment.
///
/// Rules are applied in a fixed precedence order; the first applicable
/// rule wins:
///
/// 1. Duplicate `(date, person)` — hard block
/// 2. Daily capacity reached — hard block. The cap counts every
///    assignment on the date, regardless of the holders' ranks.
/// 3. Person's own team on base duty — soft conflict
/// 4. Monthly extra-shift limit reached — soft conflict
///
/// With `override_conflicts` set, rules 3 and 4 both proceed and either
/// one marks the resulting assignment with `has_conflict = true`.
///
/// # Arguments
///
/// * `config` - The roster configuration
/// * `person` - The person being assigned
/// * `date` - The date of the proposed assignment
/// * `day_assignments` - The existing assignment list for the date
/// * `month_count` - The person's current assignment count in the month
/// * `override_conflicts` - Whether soft conflicts are accepted
#[must_use]
pub fn evaluate_assignment(
    config: &RosterConfig,
    person: &Person,
    date: NaiveDate,
    day_assignments: &[Assignment],
    month_count: usize,
    override_conflicts: bool,
) -> Evaluation {
    // Rule 1: a person holds at most one assignment per date.
    if day_assignments
        .iter()
        .any(|assignment| assignment.person_id == person.id)
    {
        return Evaluation::Blocked(BlockReason::DuplicateAssignment {
            date,
            person_id: person.id.clone(),
        });
    }

    // Rule 2: the date must have room for another assignment.
    if day_assignments.len() >= config.max_per_day() {
        return Evaluation::Blocked(BlockReason::DailyCapacityExceeded {
            date,
            limit: config.max_per_day(),
        });
    }

    let mut has_conflict: bool = false;

    // Rule 3: assigning a person whose own team owns base duty that day
    // is a soft conflict.
    let duty_team: Team = team_on_duty(config, date);
    if person.team == duty_team {
        if !override_conflicts {
            return Evaluation::ConfirmationRequired(ConflictReason::TeamOnDuty {
                date,
                person_id: person.id.clone(),
                team: duty_team,
            });
        }
        has_conflict = true;
    }

    // Rule 4: the monthly extra-shift limit is a soft conflict.
    if month_count >= config.max_extra_shifts() {
        if !override_conflicts {
            return Evaluation::ConfirmationRequired(ConflictReason::MonthlyLimitReached {
                person_id: person.id.clone(),
                month: YearMonth::of(date),
                limit: config.max_extra_shifts(),
            });
        }
        has_conflict = true;
    }

    Evaluation::Allowed { has_conflict }
}

/// Validates that a person's basic field constraints are met.
///
/// This function checks that required fields are not empty. The team is
/// already constrained by its closed type.
///
/// # Arguments
///
/// * `rank` - The person's rank label
/// * `name` - The person's display name
///
/// # Errors
///
/// Returns an error if:
/// - The rank is empty
/// - The name is empty
pub fn validate_person_fields(rank: &str, name: &str) -> Result<(), DomainError> {
    if rank.trim().is_empty() {
        return Err(DomainError::InvalidRank(String::from(
            "Rank cannot be empty",
        )));
    }
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }
    Ok(())
}
