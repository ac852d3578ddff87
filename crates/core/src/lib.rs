// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Roster state, assignment engine, and report queries.
//!
//! This crate owns the in-memory roster state (`RosterStore`), the
//! mutation façade (`RosterEngine`), the `Repository` contract a hosting
//! application implements for durability, and the read-only report
//! queries over roster state.
//!
//! ## Mutation model
//!
//! `RosterEngine` is the only entry point that mutates state. Every
//! mutating operation runs validate-then-apply-then-persist as one
//! synchronous step over `&mut self`, so no other mutation can interleave
//! between validation and application. If persistence fails, the
//! in-memory change is rolled back and the error is surfaced; the store
//! always matches the last known-durable state.
//!
//! Hosts that expose one roster to concurrent callers must serialize
//! calls externally (a single-writer lock or an actor mailbox); the
//! engine itself has no internal locking.

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

mod engine;
mod error;
mod reports;
mod repository;
mod store;

#[cfg(test)]
mod tests;

pub use engine::{AssignOutcome, Candidate, RosterEngine};
pub use error::EngineError;
pub use reports::{
    PersonReportRow, RosterSummary, ScheduleEntry, TeamReportRow, month_schedule, person_report,
    summarize, team_report,
};
pub use repository::{Repository, RepositoryError};
pub use store::{PersonPatch, RosterStore};
