// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDate;
use duty_roster_domain::{Assignment, Person};
use std::collections::BTreeMap;

/// Errors surfaced by a `Repository` implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Reading from the backing store failed.
    ReadFailed(String),
    /// Writing to the backing store failed.
    WriteFailed(String),
    /// The backing store holds data the repository cannot interpret.
    Corrupted(String),
}

impl std::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReadFailed(msg) => write!(f, "Repository read failed: {msg}"),
            Self::WriteFailed(msg) => write!(f, "Repository write failed: {msg}"),
            Self::Corrupted(msg) => write!(f, "Repository data corrupted: {msg}"),
        }
    }
}

impl std::error::Error for RepositoryError {}

/// The durability contract the hosting application implements.
///
/// The engine loads the full person set and assignment map at
/// construction and writes each back whole after a successful mutation.
/// Calls are synchronous and expected to complete or fail within a
/// bounded time; the engine never retries on its own, and a failed save
/// rolls the in-memory state back. Retry policy, if any, belongs to the
/// implementation or the caller.
pub trait Repository {
    /// Loads the full person set.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read or its
    /// contents cannot be interpreted.
    fn load_persons(&self) -> Result<Vec<Person>, RepositoryError>;

    /// Loads the full date-to-assignment-list map.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read or its
    /// contents cannot be interpreted.
    fn load_assignments(&self) -> Result<BTreeMap<NaiveDate, Vec<Assignment>>, RepositoryError>;

    /// Saves the full person set.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn save_persons(&mut self, persons: &[Person]) -> Result<(), RepositoryError>;

    /// Saves the full date-to-assignment-list map.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn save_assignments(
        &mut self,
        assignments: &BTreeMap<NaiveDate, Vec<Assignment>>,
    ) -> Result<(), RepositoryError>;
}
