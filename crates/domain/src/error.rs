// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::PersonId;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Rank is empty or invalid.
    InvalidRank(String),
    /// Name is empty or invalid.
    InvalidName(String),
    /// Team label is not one of the closed set.
    InvalidTeam(String),
    /// The rotation order is invalid.
    InvalidRotation {
        /// Description of the validation error.
        reason: String,
    },
    /// The cycle length is invalid.
    InvalidCycleLength {
        /// The invalid number of days.
        days: i64,
    },
    /// A capacity limit is invalid.
    InvalidLimit {
        /// The name of the limit.
        name: &'static str,
        /// The invalid value.
        value: usize,
    },
    /// Invalid year-month value.
    InvalidYearMonth(String),
    /// Person does not exist.
    PersonNotFound(PersonId),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRank(msg) => write!(f, "Invalid rank: {msg}"),
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidTeam(label) => write!(f, "Invalid team: '{label}'"),
            Self::InvalidRotation { reason } => write!(f, "Invalid rotation: {reason}"),
            Self::InvalidCycleLength { days } => {
                write!(
                    f,
                    "Invalid cycle length: {days}. Must be positive and divisible by 3"
                )
            }
            Self::InvalidLimit { name, value } => {
                write!(f, "Invalid {name}: {value}. Must be at least 1")
            }
            Self::InvalidYearMonth(msg) => write!(f, "Invalid year-month: {msg}"),
            Self::PersonNotFound(id) => write!(f, "Person not found: {}", id.value()),
        }
    }
}

impl std::error::Error for DomainError {}
