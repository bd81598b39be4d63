// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Marker queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use freefood_domain::Marker;
use tracing::debug;

use crate::diesel_schema::markers;
use crate::error::PersistenceError;

/// Diesel Queryable struct for marker rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = markers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct MarkerRow {
    id: i64,
    food: String,
    lat: f64,
    long: f64,
    college: String,
    capacity: i64,
    dibs: i64,
    likes: i64,
    dislikes: i64,
    creator_email: String,
    pic_url: Option<String>,
    start_time: String,
    end_time: String,
    building: String,
    event: String,
    additional_info: String,
}

impl MarkerRow {
    fn into_marker(self) -> Marker {
        Marker {
            id: self.id,
            food: self.food,
            lat: self.lat,
            long: self.long,
            college: self.college,
            start_time: self.start_time,
            end_time: self.end_time,
            capacity: self.capacity,
            dibs: self.dibs,
            likes: self.likes,
            dislikes: self.dislikes,
            building: self.building,
            event: self.event,
            additional_info: self.additional_info,
            creator_email: self.creator_email,
            pic_url: self.pic_url,
        }
    }
}

/// Retrieves every marker in ascending id order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_markers(conn: &mut SqliteConnection) -> Result<Vec<Marker>, PersistenceError> {
    let rows: Vec<MarkerRow> = markers::table
        .order(markers::id.asc())
        .select(MarkerRow::as_select())
        .load(conn)?;

    debug!(count = rows.len(), "Loaded markers");

    Ok(rows.into_iter().map(MarkerRow::into_marker).collect())
}

/// Retrieves the markers whose college exactly equals `college`.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_markers_for_college(
    conn: &mut SqliteConnection,
    college: &str,
) -> Result<Vec<Marker>, PersistenceError> {
    debug!("Filtering markers by college: {}", college);

    Ok(list_markers(conn)?
        .into_iter()
        .filter(|marker| marker.college == college)
        .collect())
}
