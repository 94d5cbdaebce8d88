// SPDX-License-Identifier: MIT OR Apache-2.0

mod handlers;

use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::timeout::TimeoutLayer;
use trekking_store::GroupStore;

/// Requests taking longer than this are answered with `408 Request Timeout`.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

fn timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

/// Build the HTTP router on top of a group store.
///
/// All endpoints are plain `GET` requests:
///
/// ```text
/// /                                      usage
/// /t                                     list all trekkingen
/// /summary                               list all trekkingen and whether they were drawn
/// /t/{trekking}/add                      start a new trekking
/// /t/{trekking}/raw                      trekking as JSON
/// /t/{trekking}/people                   list people in a trekking
/// /t/{trekking}/people/{name}/add        add a person
/// /t/{trekking}/people/{name}/remove     remove a person
/// /t/{trekking}/trek                     draw the trekking
/// /t/{trekking}/people/{name}/getrokken  see who a person has drawn
/// ```
pub fn router<S>(store: S) -> Router
where
    S: GroupStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(handlers::home))
        .route("/t", get(handlers::list_names::<S>))
        .route("/summary", get(handlers::list_summaries::<S>))
        .route("/t/{trekking}", get(handlers::people::<S>))
        .route("/t/{trekking}/add", get(handlers::create::<S>))
        .route("/t/{trekking}/raw", get(handlers::raw::<S>))
        .route("/t/{trekking}/people", get(handlers::people::<S>))
        .route(
            "/t/{trekking}/people/{name}/add",
            get(handlers::add_person::<S>),
        )
        .route(
            "/t/{trekking}/people/{name}/remove",
            get(handlers::remove_person::<S>),
        )
        .route("/t/{trekking}/trek", get(handlers::draw::<S>))
        .route(
            "/t/{trekking}/people/{name}/getrokken",
            get(handlers::recipient::<S>),
        )
        .with_state(store)
        .layer(timeout_layer(REQUEST_TIMEOUT))
}
