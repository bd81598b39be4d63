// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.

use freefood_domain::{Marker, Stats};
use freefood_persistence::Persistence;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{ApiError, ApiResult};
use crate::request_response::{
    FedTodayUpdateRequest, FoodEventsUpdateRequest, GREETING, HealthResponse, MarkerResponse,
    StatsResponse,
};

/// Returns the root greeting. Touches no state.
#[must_use]
pub fn health() -> HealthResponse {
    HealthResponse {
        message: String::from(GREETING),
    }
}

/// Lists every marker in store order.
///
/// # Errors
///
/// Returns an error if the store cannot be queried.
pub fn list_markers(persistence: &mut Persistence) -> ApiResult<Vec<MarkerResponse>> {
    let markers: Vec<Marker> = persistence.list_markers()?;
    debug!(count = markers.len(), "Listed markers");
    Ok(markers.into_iter().map(MarkerResponse::from).collect())
}

/// Lists the markers whose college exactly equals `college`, in store order.
///
/// # Errors
///
/// Returns an error if the store cannot be queried.
pub fn list_college_markers(
    persistence: &mut Persistence,
    college: &str,
) -> ApiResult<Vec<MarkerResponse>> {
    let markers: Vec<Marker> = persistence.list_markers_for_college(college)?;
    debug!(college = %college, count = markers.len(), "Listed college markers");
    Ok(markers.into_iter().map(MarkerResponse::from).collect())
}

/// Validates a raw marker creation payload and decodes it.
///
/// Every key in [`Marker::REQUIRED_KEYS`] must be present. A payload that is
/// not a JSON object is treated as missing all of them.
///
/// # Errors
///
/// Returns `ApiError::MissingField` for the first absent key, or
/// `ApiError::InvalidInput` if a value has the wrong JSON type.
pub fn parse_marker(body: &Value) -> ApiResult<Marker> {
    let Some(object) = body.as_object() else {
        return Err(ApiError::MissingField {
            field: String::from(Marker::REQUIRED_KEYS[0]),
        });
    };

    if let Some(field) = Marker::REQUIRED_KEYS
        .iter()
        .find(|key| !object.contains_key(**key))
    {
        return Err(ApiError::MissingField {
            field: (*field).to_string(),
        });
    }

    Marker::deserialize(body).map_err(|e| ApiError::InvalidInput {
        message: e.to_string(),
    })
}

/// Creates a marker from a raw JSON payload.
///
/// The required-key check runs before any store access, so a rejected
/// payload writes nothing.
///
/// # Errors
///
/// Returns an error if a key is missing, a value is mistyped, or the insert
/// fails (including a duplicate id).
pub fn add_marker(persistence: &mut Persistence, body: &Value) -> ApiResult<()> {
    let marker: Marker = parse_marker(body)?;

    info!(
        marker_id = marker.id,
        college = %marker.college,
        "Adding marker"
    );

    persistence.add_marker(&marker)?;
    Ok(())
}

/// Returns the last stats row in store order whose college equals `college`.
///
/// # Errors
///
/// Returns an error if the store cannot be queried.
pub fn get_stats(persistence: &mut Persistence, college: &str) -> ApiResult<Option<StatsResponse>> {
    let stats: Option<Stats> = persistence.find_stats_for_college(college)?;
    Ok(stats.map(StatsResponse::from))
}

/// Applies a `fed_today` change to `college` and to the `all` row.
///
/// # Returns
///
/// The rows as written. No match is not an error.
///
/// # Errors
///
/// Returns an error if a counter would overflow or the update fails.
pub fn update_fed_today(
    persistence: &mut Persistence,
    college: &str,
    request: FedTodayUpdateRequest,
) -> ApiResult<Vec<StatsResponse>> {
    let written: Vec<Stats> = persistence.update_fed_today(college, request.change())?;
    info!(college = %college, rows = written.len(), "Updated fed_today");
    Ok(written.into_iter().map(StatsResponse::from).collect())
}

/// Applies a `food_events` change to `college` and recomputes the `all` row.
///
/// # Returns
///
/// The rows as written.
///
/// # Errors
///
/// Returns an error if a counter would overflow or the update fails.
pub fn update_food_events(
    persistence: &mut Persistence,
    college: &str,
    request: FoodEventsUpdateRequest,
) -> ApiResult<Vec<StatsResponse>> {
    let written: Vec<Stats> =
        persistence.update_food_events(college, request.food_events_change)?;
    info!(college = %college, rows = written.len(), "Updated food_events");
    Ok(written.into_iter().map(StatsResponse::from).collect())
}
