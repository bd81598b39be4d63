// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use freefood_domain::{FedTodayChange, Marker, Stats};
use serde::{Deserialize, Serialize};

/// Greeting returned by the root endpoint.
pub const GREETING: &str = "Free Food University API. You're in the right place.";

/// API response for the root endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// The greeting.
    pub message: String,
}

/// A marker as returned by the read endpoints.
///
/// `building`, `event` and `additional_info` are write-only and never appear
/// here. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerResponse {
    pub id: i64,
    pub food: String,
    pub lat: f64,
    pub long: f64,
    pub college: String,
    pub capacity: i64,
    pub dibs: i64,
    pub likes: i64,
    pub dislikes: i64,
    pub creator_email: String,
    pub pic_url: Option<String>,
    pub start_time: String,
    pub end_time: String,
}

impl From<Marker> for MarkerResponse {
    fn from(marker: Marker) -> Self {
        Self {
            id: marker.id,
            food: marker.food,
            lat: marker.lat,
            long: marker.long,
            college: marker.college,
            capacity: marker.capacity,
            dibs: marker.dibs,
            likes: marker.likes,
            dislikes: marker.dislikes,
            creator_email: marker.creator_email,
            pic_url: marker.pic_url,
            start_time: marker.start_time,
            end_time: marker.end_time,
        }
    }
}

/// A stats row as returned by the stats endpoint. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub id: i64,
    pub food_events: i64,
    pub fed_today: i64,
    pub fed_all_time: i64,
    pub college: String,
}

impl From<Stats> for StatsResponse {
    fn from(stats: Stats) -> Self {
        Self {
            id: stats.id,
            food_events: stats.food_events,
            fed_today: stats.fed_today,
            fed_all_time: stats.fed_all_time,
            college: stats.college,
        }
    }
}

/// API request to change a college's `fed_today` counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FedTodayUpdateRequest {
    /// The delta to apply, or `-1` to reset.
    pub fed_today_change: i64,
}

impl FedTodayUpdateRequest {
    /// The requested change as a domain value.
    #[must_use]
    pub const fn change(self) -> FedTodayChange {
        FedTodayChange::new(self.fed_today_change)
    }
}

/// API request to change a college's `food_events` counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodEventsUpdateRequest {
    /// The delta to apply.
    pub food_events_change: i64,
}
