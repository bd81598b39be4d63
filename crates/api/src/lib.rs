// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the Free Food University service.
//!
//! Each public function implements one endpoint against a borrowed
//! [`Persistence`](freefood_persistence::Persistence). HTTP concerns (status
//! codes, body shapes for errors) belong to the server.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, ApiResult};
pub use handlers::{
    add_marker, get_stats, health, list_college_markers, list_markers, parse_marker,
    update_fed_today, update_food_events,
};
pub use request_response::{
    FedTodayUpdateRequest, FoodEventsUpdateRequest, GREETING, HealthResponse, MarkerResponse,
    StatsResponse,
};
