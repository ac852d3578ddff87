// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDate;
use duty_roster::{Repository, RepositoryError};
use duty_roster_domain::{Assignment, Person};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name for the persisted person set.
const PERSONS_FILE: &str = "persons.json";
/// File name for the persisted assignment map.
const ASSIGNMENTS_FILE: &str = "assignments.json";
/// Suffix for the staging file used during atomic writes.
const TMP_SUFFIX: &str = ".tmp";

/// A `Repository` backed by two JSON documents in one directory.
///
/// Dates serialize as ISO `YYYY-MM-DD` map keys. Missing files load as
/// empty state, so a fresh directory is a valid empty roster.
#[derive(Debug)]
pub struct JsonFileRepository {
    /// The directory holding both documents.
    dir: PathBuf,
}

impl JsonFileRepository {
    /// Opens a repository over the given directory, creating it if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let dir: PathBuf = dir.into();
        fs::create_dir_all(&dir).map_err(|err| {
            RepositoryError::WriteFailed(format!(
                "cannot create directory {}: {err}",
                dir.display()
            ))
        })?;
        info!(dir = %dir.display(), "Opened JSON file repository");
        Ok(Self { dir })
    }

    /// Returns the repository directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read_document<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, RepositoryError> {
        let path: PathBuf = self.dir.join(name);
        if !path.exists() {
            debug!(path = %path.display(), "Document absent, loading empty state");
            return Ok(None);
        }
        let contents: String = fs::read_to_string(&path).map_err(|err| {
            RepositoryError::ReadFailed(format!("cannot read {}: {err}", path.display()))
        })?;
        let value: T = serde_json::from_str(&contents).map_err(|err| {
            RepositoryError::Corrupted(format!("cannot parse {}: {err}", path.display()))
        })?;
        Ok(Some(value))
    }

    /// Serializes a document and renames it into place, so a failed
    /// write never leaves a half-written file behind.
    fn write_document<T: Serialize>(&self, name: &str, value: &T) -> Result<(), RepositoryError> {
        let path: PathBuf = self.dir.join(name);
        let staging: PathBuf = self.dir.join(format!("{name}{TMP_SUFFIX}"));

        let contents: String = serde_json::to_string_pretty(value).map_err(|err| {
            RepositoryError::WriteFailed(format!("cannot serialize {name}: {err}"))
        })?;
        fs::write(&staging, contents).map_err(|err| {
            RepositoryError::WriteFailed(format!("cannot write {}: {err}", staging.display()))
        })?;
        fs::rename(&staging, &path).map_err(|err| {
            RepositoryError::WriteFailed(format!(
                "cannot move {} into place: {err}",
                staging.display()
            ))
        })?;
        debug!(path = %path.display(), "Document saved");
        Ok(())
    }
}

impl Repository for JsonFileRepository {
    fn load_persons(&self) -> Result<Vec<Person>, RepositoryError> {
        Ok(self.read_document(PERSONS_FILE)?.unwrap_or_default())
    }

    fn load_assignments(&self) -> Result<BTreeMap<NaiveDate, Vec<Assignment>>, RepositoryError> {
        Ok(self.read_document(ASSIGNMENTS_FILE)?.unwrap_or_default())
    }

    fn save_persons(&mut self, persons: &[Person]) -> Result<(), RepositoryError> {
        self.write_document(PERSONS_FILE, &persons)
    }

    fn save_assignments(
        &mut self,
        assignments: &BTreeMap<NaiveDate, Vec<Assignment>>,
    ) -> Result<(), RepositoryError> {
        self.write_document(ASSIGNMENTS_FILE, assignments)
    }
}
