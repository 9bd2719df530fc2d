use axum::{Json, http::StatusCode};
use csms_core::StationError;
use serde::{Deserialize, Serialize};

/// Wire shape of every error the API reports.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Map a domain error to its HTTP status and JSON body.
pub(crate) fn station_error_to_response(
    error: StationError,
) -> (StatusCode, Json<ErrorResponse>) {
    let status = match error {
        StationError::StationNotFound { .. } => StatusCode::NOT_FOUND,
        StationError::MissingFields
        | StationError::MaxPowerOutOfRange
        | StationError::ChargerCountOutOfRange
        | StationError::ConsumedEnergyOutOfRange
        | StationError::NoChargersAvailable { .. }
        | StationError::AllChargersFree { .. } => StatusCode::BAD_REQUEST,
    };

    (
        status,
        Json(ErrorResponse {
            message: error.to_string(),
        }),
    )
}
