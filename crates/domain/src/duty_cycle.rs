// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Base-duty cycle lookup.
//!
//! The rotation assigns one of three teams to base duty for each calendar
//! date, in fixed contiguous blocks anchored at a reference date.
//!
//! ## Invariants
//!
//! - The lookup is total: every date maps to exactly one rotating team
//! - The lookup is periodic with period `cycle_days`
//! - The non-rotating day-shift team is never returned
//! - Dates before the anchor are handled via floored modulo, so the
//!   rotation extends backwards in time without discontinuity

use crate::types::{RosterConfig, Team};
use chrono::NaiveDate;

/// Returns the team on base duty for the given date.
///
/// The offset from the anchor date is reduced with a floored modulo
/// (`rem_euclid`), which keeps the day-in-cycle in `[0, cycle_days)` for
/// dates on either side of the anchor. The day-in-cycle then selects a
/// block of the rotation: with the default configuration, days 0-6 belong
/// to the first rotation team, 7-13 to the second, and 14-20 to the third.
///
/// # Arguments
///
/// * `config` - The roster configuration holding the anchor and rotation
/// * `date` - The calendar date to look up
#[must_use]
pub fn team_on_duty(config: &RosterConfig, date: NaiveDate) -> Team {
    let diff_days: i64 = (date - config.reference_date()).num_days();
    let day_in_cycle: i64 = diff_days.rem_euclid(config.cycle_days());
    let block: usize = usize::try_from(day_in_cycle / config.block_days()).unwrap_or(0);
    config.rotation()[block]
}
