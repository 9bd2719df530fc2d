use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use csms_core::{StationError, StationId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::app_state::AppState;
use crate::error::station_error_to_response;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StopSessionRequest {
    /// Energy the session delivered, in kWh
    pub kwh: Option<f64>,
}

/// Occupy one charger port at a station
pub async fn start_session(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<StationId>,
) -> impl IntoResponse {
    let mut store = app_state.store.lock().unwrap();
    match store.start_session(id) {
        Ok(station) => (StatusCode::OK, Json(station)).into_response(),
        Err(error) => station_error_to_response(error).into_response(),
    }
}

/// Free one charger port, reporting the consumed energy
pub async fn stop_session(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<StationId>,
    Json(payload): Json<StopSessionRequest>,
) -> impl IntoResponse {
    let mut store = app_state.store.lock().unwrap();
    // An unknown station wins over a missing reading, so the 404 check
    // comes first.
    let result = match payload.kwh {
        Some(kwh) => store.stop_session(id, kwh),
        None if store.get(id).is_none() => Err(StationError::StationNotFound { station_id: id }),
        None => Err(StationError::ConsumedEnergyOutOfRange),
    };

    match result {
        Ok(station) => (StatusCode::OK, Json(station)).into_response(),
        Err(error) => station_error_to_response(error).into_response(),
    }
}
