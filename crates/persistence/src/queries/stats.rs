// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stats queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use freefood_domain::Stats;
use tracing::debug;

use crate::diesel_schema::stats;
use crate::error::PersistenceError;

/// Diesel Queryable struct for stats rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = stats)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct StatsRow {
    id: i64,
    college: String,
    food_events: i64,
    fed_today: i64,
    fed_all_time: i64,
}

/// Retrieves every stats row in ascending id order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_stats(conn: &mut SqliteConnection) -> Result<Vec<Stats>, PersistenceError> {
    let rows: Vec<StatsRow> = stats::table
        .order(stats::id.asc())
        .select(StatsRow::as_select())
        .load(conn)?;

    debug!(count = rows.len(), "Loaded stats rows");

    Ok(rows
        .into_iter()
        .map(|row| Stats {
            id: row.id,
            college: row.college,
            food_events: row.food_events,
            fed_today: row.fed_today,
            fed_all_time: row.fed_all_time,
        })
        .collect())
}

/// Retrieves the stats row for `college`.
///
/// The college column is not unique. When several rows match, the one
/// latest in store order wins.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no row matches.
pub fn find_stats_for_college(
    conn: &mut SqliteConnection,
    college: &str,
) -> Result<Option<Stats>, PersistenceError> {
    debug!("Looking up stats for college: {}", college);

    Ok(list_stats(conn)?
        .into_iter()
        .rev()
        .find(|row| row.college == college))
}
