// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stats endpoint tests organized by behavior.

use freefood_persistence::Persistence;

use crate::{
    FedTodayUpdateRequest, FoodEventsUpdateRequest, StatsResponse, get_stats, update_fed_today,
    update_food_events,
};

use super::helpers::create_seeded_persistence;

fn stats_for(persistence: &mut Persistence, college: &str) -> StatsResponse {
    get_stats(persistence, college).unwrap().unwrap()
}

#[test]
fn test_seeded_fixture_counters() {
    let mut persistence: Persistence = create_seeded_persistence();

    let all: StatsResponse = stats_for(&mut persistence, "all");
    assert_eq!(
        (all.food_events, all.fed_today, all.fed_all_time),
        (9, 7, 7)
    );
}

#[test]
fn test_get_stats_for_unknown_college_is_none() {
    let mut persistence: Persistence = create_seeded_persistence();

    assert_eq!(
        get_stats(&mut persistence, "nonexistent-college").unwrap(),
        None
    );
}

#[test]
fn test_stats_response_serializes_in_wire_order() {
    let mut persistence: Persistence = create_seeded_persistence();

    let ucla: StatsResponse = stats_for(&mut persistence, "UCLA");
    let body: String = serde_json::to_string(&ucla).unwrap();

    assert_eq!(
        body,
        format!(
            r#"{{"id":{},"food_events":4,"fed_today":7,"fed_all_time":7,"college":"UCLA"}}"#,
            ucla.id
        )
    );
}

#[test]
fn test_fed_today_reset_zeroes_college_and_all() {
    let mut persistence: Persistence = create_seeded_persistence();

    let written: Vec<StatsResponse> = update_fed_today(
        &mut persistence,
        "UCLA",
        FedTodayUpdateRequest {
            fed_today_change: -1,
        },
    )
    .unwrap();

    assert_eq!(written.len(), 2);
    let ucla: StatsResponse = stats_for(&mut persistence, "UCLA");
    let all: StatsResponse = stats_for(&mut persistence, "all");
    assert_eq!((ucla.fed_today, ucla.fed_all_time), (0, 7));
    assert_eq!((all.fed_today, all.fed_all_time), (0, 7));
}

#[test]
fn test_fed_today_increment_adds_to_both_counters() {
    let mut persistence: Persistence = create_seeded_persistence();

    update_fed_today(
        &mut persistence,
        "UCLA",
        FedTodayUpdateRequest {
            fed_today_change: 5,
        },
    )
    .unwrap();

    let ucla: StatsResponse = stats_for(&mut persistence, "UCLA");
    let all: StatsResponse = stats_for(&mut persistence, "all");
    assert_eq!((ucla.fed_today, ucla.fed_all_time), (12, 12));
    assert_eq!((all.fed_today, all.fed_all_time), (12, 12));
}

#[test]
fn test_fed_today_negative_change_credits_nothing_all_time() {
    let mut persistence: Persistence = create_seeded_persistence();

    update_fed_today(
        &mut persistence,
        "UCLA",
        FedTodayUpdateRequest {
            fed_today_change: -3,
        },
    )
    .unwrap();

    let ucla: StatsResponse = stats_for(&mut persistence, "UCLA");
    assert_eq!((ucla.fed_today, ucla.fed_all_time), (4, 7));
}

#[test]
fn test_fed_today_for_all_updates_rollup_once() {
    let mut persistence: Persistence = create_seeded_persistence();

    let written: Vec<StatsResponse> = update_fed_today(
        &mut persistence,
        "all",
        FedTodayUpdateRequest {
            fed_today_change: 2,
        },
    )
    .unwrap();

    assert_eq!(written.len(), 1);
    let all: StatsResponse = stats_for(&mut persistence, "all");
    assert_eq!((all.fed_today, all.fed_all_time), (9, 9));
}

#[test]
fn test_food_events_update_recomputes_all_excluding_placeholders() {
    let mut persistence: Persistence = create_seeded_persistence();
    update_food_events(
        &mut persistence,
        "pickCollege",
        FoodEventsUpdateRequest {
            food_events_change: 100,
        },
    )
    .unwrap();

    update_food_events(
        &mut persistence,
        "UCLA",
        FoodEventsUpdateRequest {
            food_events_change: 3,
        },
    )
    .unwrap();

    assert_eq!(stats_for(&mut persistence, "UCLA").food_events, 7);
    assert_eq!(stats_for(&mut persistence, "pickCollege").food_events, 100);
    assert_eq!(stats_for(&mut persistence, "all").food_events, 12);
}

#[test]
fn test_food_events_for_unknown_college_still_recomputes_all() {
    let mut persistence: Persistence = create_seeded_persistence();

    let written: Vec<StatsResponse> = update_food_events(
        &mut persistence,
        "MIT",
        FoodEventsUpdateRequest {
            food_events_change: 50,
        },
    )
    .unwrap();

    assert_eq!(written.len(), 1);
    assert_eq!(stats_for(&mut persistence, "all").food_events, 9);
}
