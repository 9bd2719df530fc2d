//! CSMS API Library
//!
//! This library provides the HTTP API for the Voltra charging station
//! management service.

mod app_state;
mod config;
mod error;
mod session;
mod station;

pub use crate::app_state::AppState;
pub use crate::config::{ApiConfig, DEFAULT_PAGE_SIZE};
pub use crate::error::ErrorResponse;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

/// Create the application router with all endpoints
pub fn create_app(state: AppState) -> Router {
    let shared_state = Arc::new(state);
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/stations",
            get(station::list_stations).post(station::create_station),
        )
        .route(
            "/api/stations/{id}",
            get(station::get_station).put(station::update_station),
        )
        .route(
            "/api/stations/{id}/start-session",
            post(session::start_session),
        )
        .route(
            "/api/stations/{id}/stop-session",
            post(session::stop_session),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}
