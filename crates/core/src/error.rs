// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::repository::RepositoryError;
use duty_roster_domain::DomainError;

/// Errors surfaced by the roster engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A domain rule or field constraint was violated.
    Domain(DomainError),
    /// A repository call failed; the in-memory state was rolled back.
    Repository(RepositoryError),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Domain(err) => write!(f, "Domain violation: {err}"),
            Self::Repository(err) => write!(f, "Persistence failure: {err}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<DomainError> for EngineError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<RepositoryError> for EngineError {
    fn from(err: RepositoryError) -> Self {
        Self::Repository(err)
    }
}
