// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Repository backends for the Duty Roster Engine.
//!
//! This crate provides concrete implementations of the engine's
//! `Repository` contract:
//!
//! - `JsonFileRepository` — two JSON documents (`persons.json`,
//!   `assignments.json`) in one directory. Writes land in a temporary
//!   file first and are renamed into place, so a failed write never
//!   leaves a half-written document behind.
//! - `MemoryRepository` — a volatile in-memory backend for hosts that do
//!   not need durability and for tests, with a write-failure switch for
//!   exercising rollback paths.
//!
//! A host selects one backend at construction and hands it to
//! `RosterEngine::open`; the engine never branches on backend per call.

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

mod json_file;
mod memory;

#[cfg(test)]
mod tests;

pub use json_file::JsonFileRepository;
pub use memory::MemoryRepository;
