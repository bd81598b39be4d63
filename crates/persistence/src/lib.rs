// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Free Food University API.
//!
//! This crate stores markers and stats rows in `SQLite` through Diesel.
//! The schema is created by embedded migrations every time a database is
//! opened, so a fresh file or in-memory database is immediately usable.
//!
//! ## Databases
//!
//! - **In-memory**: development and tests. Each instance gets its own
//!   shared-cache database name, so tests are isolated from one another.
//! - **File**: production. Opened in WAL mode.
//!
//! ## Writes
//!
//! Counter updates read the stats table, plan new values with
//! `freefood_domain::counters`, and write them back with field-level
//! updates, all inside one transaction.

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
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use freefood_domain::{FedTodayChange, Marker, Stats};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod backend;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for markers and stats.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String =
            format!("file:freefood_memdb_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// The file is created if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }

    // ========================================================================
    // Markers
    // ========================================================================

    /// Retrieves every marker in store order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_markers(&mut self) -> Result<Vec<Marker>, PersistenceError> {
        queries::list_markers(&mut self.conn)
    }

    /// Retrieves the markers whose college exactly equals `college`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_markers_for_college(
        &mut self,
        college: &str,
    ) -> Result<Vec<Marker>, PersistenceError> {
        queries::list_markers_for_college(&mut self.conn, college)
    }

    /// Inserts a new marker.
    ///
    /// # Errors
    ///
    /// Returns an error if a marker with the same id exists or the insert fails.
    pub fn add_marker(&mut self, marker: &Marker) -> Result<(), PersistenceError> {
        mutations::insert_marker(&mut self.conn, marker)
    }

    // ========================================================================
    // Stats
    // ========================================================================

    /// Retrieves every stats row in store order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_stats(&mut self) -> Result<Vec<Stats>, PersistenceError> {
        queries::list_stats(&mut self.conn)
    }

    /// Retrieves the last stats row in store order whose college equals `college`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn find_stats_for_college(
        &mut self,
        college: &str,
    ) -> Result<Option<Stats>, PersistenceError> {
        queries::find_stats_for_college(&mut self.conn, college)
    }

    /// Applies a `fed_today` change to `college` and to the `all` row.
    ///
    /// # Errors
    ///
    /// Returns an error if a counter would overflow or the update fails.
    pub fn update_fed_today(
        &mut self,
        college: &str,
        change: FedTodayChange,
    ) -> Result<Vec<Stats>, PersistenceError> {
        mutations::update_fed_today(&mut self.conn, college, change)
    }

    /// Applies a `food_events` change to `college` and recomputes the `all` row.
    ///
    /// # Errors
    ///
    /// Returns an error if a counter would overflow or the update fails.
    pub fn update_food_events(
        &mut self,
        college: &str,
        change: i64,
    ) -> Result<Vec<Stats>, PersistenceError> {
        mutations::update_food_events(&mut self.conn, college, change)
    }

    /// Ensures a stats row exists for each college and for `all`.
    ///
    /// # Returns
    ///
    /// The ids of the rows that were inserted.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried or written.
    pub fn seed_stats(&mut self, colleges: &[String]) -> Result<Vec<i64>, PersistenceError> {
        mutations::seed_stats(&mut self.conn, colleges)
    }
}
