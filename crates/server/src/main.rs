// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod config;

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
};
use clap::Parser;
use freefood_api::{
    ApiError, FedTodayUpdateRequest, FoodEventsUpdateRequest, HealthResponse, MarkerResponse,
    StatsResponse, add_marker, get_stats, health, list_college_markers, list_markers,
    update_fed_today, update_food_events,
};
use freefood_persistence::{Persistence, PersistenceError};
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::config::{Args, DatabaseLocation, ServerConfig};

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for markers and stats.
    persistence: Arc<Mutex<Persistence>>,
}

/// Body returned when a marker creation payload is missing a key.
#[derive(Debug, Serialize)]
struct MissingFieldResponse {
    error: &'static str,
}

/// Generic error response.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Persistence(err) => Self::from(err),
            ApiError::MissingField { .. } | ApiError::InvalidInput { .. } => {
                error!(error = %err, "Request could not be processed");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        error!(error = %err, "Persistence error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Persistence error: {err}"),
        }
    }
}

/// Handler for GET `/` endpoint.
#[allow(clippy::unused_async)] // axum handlers must be async
async fn handle_health() -> Json<HealthResponse> {
    Json(health())
}

/// Handler for GET `/marker/all` endpoint.
///
/// Lists every marker.
async fn handle_list_markers(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<MarkerResponse>>, HttpError> {
    info!("Handling list_markers request");

    let mut persistence = app_state.persistence.lock().await;
    let markers: Vec<MarkerResponse> = list_markers(&mut persistence)?;
    drop(persistence);

    Ok(Json(markers))
}

/// Handler for GET `/marker/{college}` endpoint.
///
/// Lists the markers for one college.
async fn handle_list_college_markers(
    AxumState(app_state): AxumState<AppState>,
    Path(college): Path<String>,
) -> Result<Json<Vec<MarkerResponse>>, HttpError> {
    info!(college = %college, "Handling list_college_markers request");

    let mut persistence = app_state.persistence.lock().await;
    let markers: Vec<MarkerResponse> = list_college_markers(&mut persistence, &college)?;
    drop(persistence);

    Ok(Json(markers))
}

/// Handler for POST `/marker/add` endpoint.
///
/// A payload missing any key is answered with 200 and `{"error":"error"}`.
async fn handle_add_marker(
    AxumState(app_state): AxumState<AppState>,
    Json(body): Json<Value>,
) -> Result<Response, HttpError> {
    info!("Handling add_marker request");

    let mut persistence = app_state.persistence.lock().await;
    let result: Result<(), ApiError> = add_marker(&mut persistence, &body);
    drop(persistence);

    match result {
        Ok(()) => Ok(StatusCode::OK.into_response()),
        Err(ApiError::MissingField { field }) => {
            info!(field = %field, "Rejected marker with missing field");
            Ok(Json(MissingFieldResponse { error: "error" }).into_response())
        }
        Err(err) => Err(HttpError::from(err)),
    }
}

/// Handler for GET `/stats/{college}` endpoint.
///
/// Returns the last matching stats row, or `{}`.
async fn handle_get_stats(
    AxumState(app_state): AxumState<AppState>,
    Path(college): Path<String>,
) -> Result<Response, HttpError> {
    info!(college = %college, "Handling get_stats request");

    let mut persistence = app_state.persistence.lock().await;
    let stats: Option<StatsResponse> = get_stats(&mut persistence, &college)?;
    drop(persistence);

    Ok(stats.map_or_else(
        || Json(Map::new()).into_response(),
        |stats| Json(stats).into_response(),
    ))
}

/// Handler for PATCH `/stats/fed_today/update/{college}` endpoint.
async fn handle_update_fed_today(
    AxumState(app_state): AxumState<AppState>,
    Path(college): Path<String>,
    Json(request): Json<FedTodayUpdateRequest>,
) -> Result<StatusCode, HttpError> {
    info!(
        college = %college,
        fed_today_change = request.fed_today_change,
        "Handling update_fed_today request"
    );

    let mut persistence = app_state.persistence.lock().await;
    update_fed_today(&mut persistence, &college, request)?;
    drop(persistence);

    Ok(StatusCode::OK)
}

/// Handler for PATCH `/stats/food_events/update/{college}` endpoint.
async fn handle_update_food_events(
    AxumState(app_state): AxumState<AppState>,
    Path(college): Path<String>,
    Json(request): Json<FoodEventsUpdateRequest>,
) -> Result<StatusCode, HttpError> {
    info!(
        college = %college,
        food_events_change = request.food_events_change,
        "Handling update_food_events request"
    );

    let mut persistence = app_state.persistence.lock().await;
    update_food_events(&mut persistence, &college, request)?;
    drop(persistence);

    Ok(StatusCode::OK)
}

/// Builds the application router.
///
/// `/marker/all` and `/marker/add` are static routes and take precedence
/// over `/marker/{college}`.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_health))
        .route("/marker/all", get(handle_list_markers))
        .route("/marker/add", post(handle_add_marker))
        .route("/marker/{college}", get(handle_list_college_markers))
        .route("/stats/{college}", get(handle_get_stats))
        .route(
            "/stats/fed_today/update/{college}",
            patch(handle_update_fed_today),
        )
        .route(
            "/stats/food_events/update/{college}",
            patch(handle_update_food_events),
        )
        .with_state(app_state)
}

/// Opens the store described by `config` and applies startup seeding.
fn open_persistence(config: &ServerConfig) -> Result<Persistence, PersistenceError> {
    let mut persistence: Persistence = match &config.database {
        DatabaseLocation::File(path) => {
            info!("Using file-based database at: {}", path.display());
            Persistence::new_with_file(path)?
        }
        DatabaseLocation::InMemory => {
            info!("Using in-memory database");
            Persistence::new_in_memory()?
        }
    };

    if !config.seed_colleges.is_empty() {
        let inserted: Vec<i64> = persistence.seed_stats(&config.seed_colleges)?;
        info!(
            requested = config.seed_colleges.len(),
            inserted = inserted.len(),
            "Seeded stats rows"
        );
    }

    Ok(persistence)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Free Food University Server");

    let config: ServerConfig = ServerConfig::from_env(args)?;
    info!(mode = %config.mode, addr = %config.addr, "Resolved configuration");

    let persistence: Persistence = open_persistence(&config)?;

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    let app: Router = build_router(app_state);

    info!("Server listening on {}", config.addr);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests;
