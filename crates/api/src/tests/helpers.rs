// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use freefood_persistence::Persistence;
use serde_json::{Value, json};

use crate::{FedTodayUpdateRequest, FoodEventsUpdateRequest, update_fed_today, update_food_events};

pub fn create_marker_payload(id: i64, college: &str) -> Value {
    json!({
        "id": id,
        "food": "Pizza",
        "lat": 34.0689,
        "long": -118.4452,
        "college": college,
        "start_time": "2026-10-19T12:00:00",
        "end_time": "2026-10-19T14:00:00",
        "capacity": 40,
        "dibs": false,
        "likes": 2,
        "dislikes": 0,
        "building": "Pauley Pavilion",
        "event": "Club fair",
        "additional_info": "Vegetarian slices on the left",
        "creator_email": "host@ucla.edu",
        "pic_url": null
    })
}

/// Returns a store with stats rows for `all`, both placeholders, UCLA and USC.
///
/// Counters after setup: UCLA food_events 4, USC food_events 5, all
/// food_events 9, UCLA fed_today 7 and fed_all_time 7, all fed_today 7 and
/// fed_all_time 7.
pub fn create_seeded_persistence() -> Persistence {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence
        .seed_stats(&[
            String::from("pickCollege"),
            String::from("UCLA"),
            String::from("select-state"),
            String::from("USC"),
        ])
        .unwrap();
    update_food_events(
        &mut persistence,
        "UCLA",
        FoodEventsUpdateRequest {
            food_events_change: 4,
        },
    )
    .unwrap();
    update_food_events(
        &mut persistence,
        "USC",
        FoodEventsUpdateRequest {
            food_events_change: 5,
        },
    )
    .unwrap();
    update_fed_today(
        &mut persistence,
        "UCLA",
        FedTodayUpdateRequest {
            fed_today_change: 7,
        },
    )
    .unwrap();
    persistence
}
