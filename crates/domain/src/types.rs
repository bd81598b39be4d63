// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Deserializer};

/// College value of the synthetic roll-up stats row.
pub const ALL_COLLEGES: &str = "all";

/// College values used by the client as "nothing selected" sentinels.
///
/// Rows carrying these values exist in the stats table but never
/// contribute to the roll-up.
pub const PLACEHOLDER_COLLEGES: [&str; 2] = ["pickCollege", "select-state"];

/// Classification of a stats row by its college value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollegeKind {
    /// The `all` roll-up row.
    Rollup,
    /// A client sentinel row (`pickCollege`, `select-state`).
    Placeholder,
    /// A real institution.
    Institution,
}

impl CollegeKind {
    /// Classifies a college value. Matching is exact and case-sensitive.
    #[must_use]
    pub fn of(college: &str) -> Self {
        if college == ALL_COLLEGES {
            Self::Rollup
        } else if PLACEHOLDER_COLLEGES.contains(&college) {
            Self::Placeholder
        } else {
            Self::Institution
        }
    }
}

/// Returns whether a row with this college value is summed into the
/// `all` row's `food_events`.
#[must_use]
pub fn counts_toward_rollup(college: &str) -> bool {
    CollegeKind::of(college) == CollegeKind::Institution
}

/// A single food-sharing event.
///
/// The `id` is supplied by the client. `building`, `event` and
/// `additional_info` are stored on creation but never read back.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Marker {
    pub id: i64,
    pub food: String,
    pub lat: f64,
    pub long: f64,
    pub college: String,
    pub start_time: String,
    pub end_time: String,
    pub capacity: i64,
    /// Claim counter. Clients send either a number or a boolean.
    #[serde(deserialize_with = "deserialize_dibs")]
    pub dibs: i64,
    pub likes: i64,
    pub dislikes: i64,
    pub building: String,
    pub event: String,
    pub additional_info: String,
    pub creator_email: String,
    pub pic_url: Option<String>,
}

impl Marker {
    /// Every key a marker creation payload must carry, in payload order.
    pub const REQUIRED_KEYS: [&'static str; 16] = [
        "id",
        "food",
        "lat",
        "long",
        "college",
        "start_time",
        "end_time",
        "capacity",
        "dibs",
        "likes",
        "dislikes",
        "building",
        "event",
        "additional_info",
        "creator_email",
        "pic_url",
    ];
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DibsValue {
    Count(i64),
    Flag(bool),
}

fn deserialize_dibs<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match DibsValue::deserialize(deserializer)? {
        DibsValue::Count(count) => Ok(count),
        DibsValue::Flag(flag) => Ok(i64::from(flag)),
    }
}

/// Aggregate counters for one college.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    /// Store-assigned identifier.
    pub id: i64,
    /// The college this row counts for. Not unique in the store.
    pub college: String,
    /// Number of food events held.
    pub food_events: i64,
    /// People fed today.
    pub fed_today: i64,
    /// People fed since the row was created. Never decreases.
    pub fed_all_time: i64,
}

impl Stats {
    /// Classifies this row by its college value.
    #[must_use]
    pub fn kind(&self) -> CollegeKind {
        CollegeKind::of(&self.college)
    }
}
