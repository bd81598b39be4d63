// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use diesel::prelude::*;
use freefood_domain::Marker;

use crate::Persistence;
use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::stats;

pub fn create_test_marker(id: i64, college: &str) -> Marker {
    Marker {
        id,
        food: String::from("Bagels"),
        lat: 40.8075,
        long: -73.9626,
        college: college.to_string(),
        start_time: String::from("2026-10-19T09:00:00"),
        end_time: String::from("2026-10-19T11:00:00"),
        capacity: 25,
        dibs: 0,
        likes: 3,
        dislikes: 1,
        building: String::from("Butler Library"),
        event: String::from("Study break"),
        additional_info: String::from("Gluten-free available"),
        creator_email: String::from("organizer@columbia.edu"),
        pic_url: None,
    }
}

/// Inserts a stats row with explicit counters and returns its id.
pub fn insert_test_stats(
    persistence: &mut Persistence,
    college: &str,
    food_events: i64,
    fed_today: i64,
    fed_all_time: i64,
) -> i64 {
    diesel::insert_into(stats::table)
        .values((
            stats::college.eq(college),
            stats::food_events.eq(food_events),
            stats::fed_today.eq(fed_today),
            stats::fed_all_time.eq(fed_all_time),
        ))
        .execute(&mut persistence.conn)
        .unwrap();
    get_last_insert_rowid(&mut persistence.conn).unwrap()
}

/// Seeds the stats table the way production data looks: the roll-up, both
/// client placeholders and two colleges.
pub fn create_seeded_persistence() -> Persistence {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    insert_test_stats(&mut persistence, "all", 9, 12, 120);
    insert_test_stats(&mut persistence, "pickCollege", 100, 0, 0);
    insert_test_stats(&mut persistence, "UCLA", 4, 7, 70);
    insert_test_stats(&mut persistence, "select-state", 50, 0, 0);
    insert_test_stats(&mut persistence, "USC", 5, 5, 50);
    persistence
}
