// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Marker mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use freefood_domain::Marker;
use tracing::info;

use crate::diesel_schema::markers;
use crate::error::PersistenceError;

/// Diesel Insertable struct for marker rows.
#[derive(Insertable)]
#[diesel(table_name = markers)]
struct NewMarkerRow<'a> {
    id: i64,
    food: &'a str,
    lat: f64,
    long: f64,
    college: &'a str,
    capacity: i64,
    dibs: i64,
    likes: i64,
    dislikes: i64,
    creator_email: &'a str,
    pic_url: Option<&'a str>,
    start_time: &'a str,
    end_time: &'a str,
    building: &'a str,
    event: &'a str,
    additional_info: &'a str,
}

impl<'a> From<&'a Marker> for NewMarkerRow<'a> {
    fn from(marker: &'a Marker) -> Self {
        Self {
            id: marker.id,
            food: &marker.food,
            lat: marker.lat,
            long: marker.long,
            college: &marker.college,
            capacity: marker.capacity,
            dibs: marker.dibs,
            likes: marker.likes,
            dislikes: marker.dislikes,
            creator_email: &marker.creator_email,
            pic_url: marker.pic_url.as_deref(),
            start_time: &marker.start_time,
            end_time: &marker.end_time,
            building: &marker.building,
            event: &marker.event,
            additional_info: &marker.additional_info,
        }
    }
}

/// Inserts a new marker.
///
/// The marker id is taken as given. No uniqueness check is made up front;
/// the primary key constraint rejects duplicates.
///
/// # Errors
///
/// Returns `PersistenceError::IntegrityViolation` if a marker with the same
/// id already exists, or another error if the insert fails.
pub fn insert_marker(conn: &mut SqliteConnection, marker: &Marker) -> Result<(), PersistenceError> {
    info!(
        marker_id = marker.id,
        college = %marker.college,
        "Inserting marker"
    );

    diesel::insert_into(markers::table)
        .values(NewMarkerRow::from(marker))
        .execute(conn)?;

    Ok(())
}
