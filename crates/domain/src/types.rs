// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents a duty team.
///
/// Three teams rotate through base duty; `Expediente` is the non-rotating
/// day-shift team and never owns base duty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Team {
    /// Rotating team ALFA.
    #[serde(rename = "ALFA")]
    Alfa,
    /// Rotating team BRAVO.
    #[serde(rename = "BRAVO")]
    Bravo,
    /// Rotating team CHARLIE.
    #[serde(rename = "CHARLIE")]
    Charlie,
    /// The non-rotating day-shift team.
    #[serde(rename = "EXPEDIENTE")]
    Expediente,
}

impl Team {
    /// All teams, in report display order.
    pub const ALL: [Self; 4] = [Self::Alfa, Self::Bravo, Self::Charlie, Self::Expediente];

    /// Returns whether this team takes part in the base-duty rotation.
    #[must_use]
    pub const fn is_rotating(&self) -> bool {
        !matches!(self, Self::Expediente)
    }

    /// Converts this team to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Alfa => "ALFA",
            Self::Bravo => "BRAVO",
            Self::Charlie => "CHARLIE",
            Self::Expediente => "EXPEDIENTE",
        }
    }

    /// Parses a team from its string label.
    ///
    /// # Errors
    ///
    /// Returns an error if the label does not match a valid team.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "ALFA" => Ok(Self::Alfa),
            "BRAVO" => Ok(Self::Bravo),
            "CHARLIE" => Ok(Self::Charlie),
            "EXPEDIENTE" => Ok(Self::Expediente),
            _ => Err(DomainError::InvalidTeam(s.to_string())),
        }
    }
}

impl FromStr for Team {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An opaque, stable person identifier.
///
/// Identifiers are assigned at creation and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonId {
    /// The identifier value.
    value: String,
}

impl PersonId {
    /// Creates a new `PersonId` from an existing value.
    #[must_use]
    pub const fn new(value: String) -> Self {
        Self { value }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents a roster member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Canonical identifier (opaque, stable, immutable).
    pub id: PersonId,
    /// The person's rank or grade label (informational free text).
    pub rank: String,
    /// The person's display name.
    pub name: String,
    /// The team this person belongs to.
    pub team: Team,
}

impl Person {
    /// Creates a new `Person`.
    #[must_use]
    pub const fn new(id: PersonId, rank: String, name: String, team: Team) -> Self {
        Self {
            id,
            rank,
            name,
            team,
        }
    }
}

/// An extra-duty assignment held by one person on one date.
///
/// The `(date, person)` pair is unique; the date itself is the key of the
/// day list this assignment lives in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// The assigned person.
    pub person_id: PersonId,
    /// Whether the assignment was created over a soft conflict.
    ///
    /// Set once at creation and never recomputed, even if the person
    /// later changes team.
    pub has_conflict: bool,
}

impl Assignment {
    /// Creates a new `Assignment`.
    #[must_use]
    pub const fn new(person_id: PersonId, has_conflict: bool) -> Self {
        Self {
            person_id,
            has_conflict,
        }
    }
}

/// A calendar month, used for monthly caps and report aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    /// The calendar year.
    year: i32,
    /// The month number (1-12).
    month: u32,
}

impl YearMonth {
    /// Creates a new `YearMonth`.
    ///
    /// # Errors
    ///
    /// Returns an error if the month is not in the range 1-12.
    pub fn new(year: i32, month: u32) -> Result<Self, DomainError> {
        if (1..=12).contains(&month) {
            Ok(Self { year, month })
        } else {
            Err(DomainError::InvalidYearMonth(format!(
                "Month must be between 1 and 12, got {month}"
            )))
        }
    }

    /// Returns the month containing the given date.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the calendar year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month number (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Returns the first day of this month.
    #[must_use]
    pub fn first_day(&self) -> NaiveDate {
        // The month is validated at construction, so this cannot fail.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Returns the last day of this month.
    #[must_use]
    pub fn last_day(&self) -> NaiveDate {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|first_of_next| first_of_next.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// Returns whether the given date falls within this month.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = DomainError;

    /// Parses a `YearMonth` from its canonical `YYYY-MM` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidYearMonth(s.to_string());
        let (year_part, month_part) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year_part.parse().map_err(|_| invalid())?;
        let month: u32 = month_part.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

/// Process-wide roster configuration.
///
/// Supplied once at engine construction and read-only afterwards. The
/// cycle parameters describe the base-duty rotation; the limits govern
/// extra-duty assignment validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    /// The anchor date of the duty cycle (day 0 of the rotation).
    reference_date: NaiveDate,
    /// The rotating teams in block order starting at the anchor.
    rotation: [Team; 3],
    /// The cycle length in days, partitioned into three equal blocks.
    cycle_days: i64,
    /// Maximum assignments per date.
    max_per_day: usize,
    /// Maximum assignments per person per calendar month.
    max_extra_shifts: usize,
}

impl RosterConfig {
    /// Default cycle length in days.
    pub const DEFAULT_CYCLE_DAYS: i64 = 21;
    /// Default maximum assignments per date.
    pub const DEFAULT_MAX_PER_DAY: usize = 3;
    /// Default maximum extra shifts per person per month.
    pub const DEFAULT_MAX_EXTRA_SHIFTS: usize = 12;
    /// Default rotation order starting at the anchor date.
    pub const DEFAULT_ROTATION: [Team; 3] = [Team::Bravo, Team::Alfa, Team::Charlie];

    /// Creates a new validated `RosterConfig`.
    ///
    /// # Arguments
    ///
    /// * `reference_date` - The anchor date of the duty cycle
    /// * `rotation` - The rotating teams in block order from the anchor
    /// * `cycle_days` - The cycle length in days
    /// * `max_per_day` - Maximum assignments per date
    /// * `max_extra_shifts` - Maximum assignments per person per month
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The rotation contains a non-rotating team or a duplicate
    /// - The cycle length is not positive or not divisible into three blocks
    /// - Either limit is zero
    pub fn new(
        reference_date: NaiveDate,
        rotation: [Team; 3],
        cycle_days: i64,
        max_per_day: usize,
        max_extra_shifts: usize,
    ) -> Result<Self, DomainError> {
        for team in &rotation {
            if !team.is_rotating() {
                return Err(DomainError::InvalidRotation {
                    reason: format!("Team {team} does not rotate"),
                });
            }
        }
        if rotation[0] == rotation[1] || rotation[0] == rotation[2] || rotation[1] == rotation[2] {
            return Err(DomainError::InvalidRotation {
                reason: String::from("Rotation teams must be distinct"),
            });
        }
        if cycle_days <= 0 || cycle_days % 3 != 0 {
            return Err(DomainError::InvalidCycleLength { days: cycle_days });
        }
        if max_per_day == 0 {
            return Err(DomainError::InvalidLimit {
                name: "daily capacity",
                value: max_per_day,
            });
        }
        if max_extra_shifts == 0 {
            return Err(DomainError::InvalidLimit {
                name: "monthly extra-shift limit",
                value: max_extra_shifts,
            });
        }
        Ok(Self {
            reference_date,
            rotation,
            cycle_days,
            max_per_day,
            max_extra_shifts,
        })
    }

    /// Creates a `RosterConfig` with the default rotation, cycle length,
    /// and limits anchored at the given reference date.
    #[must_use]
    pub const fn with_reference_date(reference_date: NaiveDate) -> Self {
        Self {
            reference_date,
            rotation: Self::DEFAULT_ROTATION,
            cycle_days: Self::DEFAULT_CYCLE_DAYS,
            max_per_day: Self::DEFAULT_MAX_PER_DAY,
            max_extra_shifts: Self::DEFAULT_MAX_EXTRA_SHIFTS,
        }
    }

    /// Returns the anchor date of the duty cycle.
    #[must_use]
    pub const fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Returns the rotating teams in block order from the anchor.
    #[must_use]
    pub const fn rotation(&self) -> [Team; 3] {
        self.rotation
    }

    /// Returns the cycle length in days.
    #[must_use]
    pub const fn cycle_days(&self) -> i64 {
        self.cycle_days
    }

    /// Returns the length of one team's block within the cycle.
    #[must_use]
    pub const fn block_days(&self) -> i64 {
        self.cycle_days / 3
    }

    /// Returns the maximum number of assignments per date.
    #[must_use]
    pub const fn max_per_day(&self) -> usize {
        self.max_per_day
    }

    /// Returns the maximum extra shifts per person per month.
    #[must_use]
    pub const fn max_extra_shifts(&self) -> usize {
        self.max_extra_shifts
    }
}
