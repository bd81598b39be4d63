// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Router tests driven through `tower::ServiceExt::oneshot`.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use axum::{
    body::Body,
    http::{Request, Response, StatusCode as HttpStatusCode},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower::ServiceExt;

use crate::{AppState, build_router};
use freefood_persistence::Persistence;

/// Helper to create test app state with in-memory persistence.
fn create_test_app_state() -> AppState {
    let persistence: Persistence =
        Persistence::new_in_memory().expect("Failed to create in-memory persistence");
    AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    }
}

/// Helper to create app state with stats rows for `all`, both placeholders,
/// UCLA and USC, all counters zero.
async fn create_seeded_app_state() -> AppState {
    let app_state: AppState = create_test_app_state();
    app_state
        .persistence
        .lock()
        .await
        .seed_stats(&[
            String::from("pickCollege"),
            String::from("UCLA"),
            String::from("select-state"),
            String::from("USC"),
        ])
        .unwrap();
    app_state
}

fn create_marker_payload(id: i64, college: &str) -> Value {
    json!({
        "id": id,
        "food": "Tacos",
        "lat": 34.0224,
        "long": -118.2851,
        "college": college,
        "start_time": "2026-10-19T18:00:00",
        "end_time": "2026-10-19T20:00:00",
        "capacity": 60,
        "dibs": 1,
        "likes": 10,
        "dislikes": 2,
        "building": "Tutor Campus Center",
        "event": "Hack night",
        "additional_info": "Bring a plate",
        "creator_email": "events@usc.edu",
        "pic_url": "https://example.com/tacos.png"
    })
}

async fn send(app_state: &AppState, request: Request<Body>) -> Response<Body> {
    build_router(app_state.clone())
        .oneshot(request)
        .await
        .unwrap()
}

async fn get(app_state: &AppState, uri: &str) -> Response<Body> {
    send(
        app_state,
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

async fn send_json(app_state: &AppState, method: &str, uri: &str, body: &Value) -> Response<Body> {
    send(
        app_state,
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(body).unwrap()))
            .unwrap(),
    )
    .await
}

async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

#[tokio::test]
async fn test_root_returns_greeting() {
    let app_state: AppState = create_test_app_state();

    let response = get(&app_state, "/").await;

    assert_eq!(response.status(), HttpStatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"message": "Free Food University API. You're in the right place."})
    );
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app_state: AppState = create_test_app_state();

    let response = get(&app_state, "/restaurants").await;

    assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
    let app_state: AppState = create_test_app_state();

    let response = get(&app_state, "/marker/add").await;

    assert_eq!(response.status(), HttpStatusCode::METHOD_NOT_ALLOWED);
}
