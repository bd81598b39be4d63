// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stats mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use freefood_domain::{
    ALL_COLLEGES, FedTodayChange, Stats, plan_fed_today_update, plan_food_events_update,
};
use tracing::{debug, info};

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::stats;
use crate::error::PersistenceError;
use crate::queries::list_stats;

/// Applies a `fed_today` change to `college` and to the `all` row.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `college` - The college named in the request
/// * `change` - The requested change (`-1` resets)
///
/// # Returns
///
/// The rows as written, in store order. Empty if nothing matched.
///
/// # Errors
///
/// Returns an error if a counter would overflow or the database update fails.
/// Nothing is written on error.
pub fn update_fed_today(
    conn: &mut SqliteConnection,
    college: &str,
    change: FedTodayChange,
) -> Result<Vec<Stats>, PersistenceError> {
    info!(
        college = %college,
        fed_today_change = change.delta(),
        "Updating fed_today"
    );

    conn.transaction::<Vec<Stats>, PersistenceError, _>(|conn| {
        let rows: Vec<Stats> = list_stats(conn)?;
        let planned: Vec<Stats> = plan_fed_today_update(&rows, college, change)?;

        for row in &planned {
            diesel::update(stats::table.find(row.id))
                .set((
                    stats::fed_today.eq(row.fed_today),
                    stats::fed_all_time.eq(row.fed_all_time),
                ))
                .execute(conn)?;
            debug!(
                stats_id = row.id,
                college = %row.college,
                fed_today = row.fed_today,
                fed_all_time = row.fed_all_time,
                "Updated fed_today"
            );
        }

        Ok(planned)
    })
}

/// Applies a `food_events` change to `college` and recomputes the `all` row.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `college` - The college named in the request
/// * `change` - The amount added to the college's `food_events`
///
/// # Returns
///
/// The rows as written, in store order.
///
/// # Errors
///
/// Returns an error if a counter would overflow or the database update fails.
/// Nothing is written on error.
pub fn update_food_events(
    conn: &mut SqliteConnection,
    college: &str,
    change: i64,
) -> Result<Vec<Stats>, PersistenceError> {
    info!(
        college = %college,
        food_events_change = change,
        "Updating food_events"
    );

    conn.transaction::<Vec<Stats>, PersistenceError, _>(|conn| {
        let rows: Vec<Stats> = list_stats(conn)?;
        let planned: Vec<Stats> = plan_food_events_update(&rows, college, change)?;

        for row in &planned {
            diesel::update(stats::table.find(row.id))
                .set(stats::food_events.eq(row.food_events))
                .execute(conn)?;
            debug!(
                stats_id = row.id,
                college = %row.college,
                food_events = row.food_events,
                "Updated food_events"
            );
        }

        Ok(planned)
    })
}

/// Ensures a stats row exists for each college and for `all`.
///
/// Missing rows are inserted with zeroed counters. Existing rows are left
/// untouched, so seeding is idempotent.
///
/// # Returns
///
/// The ids of the inserted rows.
///
/// # Errors
///
/// Returns an error if the database query or insert fails.
pub fn seed_stats(
    conn: &mut SqliteConnection,
    colleges: &[String],
) -> Result<Vec<i64>, PersistenceError> {
    conn.transaction::<Vec<i64>, PersistenceError, _>(|conn| {
        let mut known: Vec<String> = list_stats(conn)?
            .into_iter()
            .map(|row| row.college)
            .collect();
        let mut inserted: Vec<i64> = Vec::new();

        let wanted = std::iter::once(ALL_COLLEGES).chain(colleges.iter().map(String::as_str));
        for college in wanted {
            if known.iter().any(|existing| existing == college) {
                continue;
            }

            diesel::insert_into(stats::table)
                .values(stats::college.eq(college))
                .execute(conn)?;
            let stats_id: i64 = get_last_insert_rowid(conn)?;

            info!(stats_id, college = %college, "Seeded stats row");
            known.push(college.to_string());
            inserted.push(stats_id);
        }

        Ok(inserted)
    })
}
