// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use crate::Stats;

pub fn create_test_stats(id: i64, college: &str, food_events: i64, fed_today: i64) -> Stats {
    Stats {
        id,
        college: college.to_string(),
        food_events,
        fed_today,
        fed_all_time: fed_today * 10,
    }
}

/// A stats table as seeded in production: one row per college, the roll-up,
/// and both client placeholders.
pub fn create_test_table() -> Vec<Stats> {
    vec![
        create_test_stats(1, "all", 9, 12),
        create_test_stats(2, "pickCollege", 100, 0),
        create_test_stats(3, "UCLA", 4, 7),
        create_test_stats(4, "select-state", 50, 0),
        create_test_stats(5, "USC", 5, 5),
    ]
}
