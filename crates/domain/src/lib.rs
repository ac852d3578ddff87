// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod duty_cycle;
mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use duty_cycle::team_on_duty;
pub use error::DomainError;
pub use types::{Assignment, Person, PersonId, RosterConfig, Team, YearMonth};
pub use validation::{
    BlockReason, ConflictReason, Evaluation, evaluate_assignment, validate_person_fields,
};
