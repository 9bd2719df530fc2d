use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use csms_core::{Station, StationDraft, StationError, StationId, StationPatch};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::app_state::AppState;
use crate::error::station_error_to_response;

/// Query string of the list endpoint.
///
/// `page` and `limit` arrive as raw strings and are parsed leniently:
/// anything non-numeric (or zero) falls back to the default instead of
/// rejecting the request.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// One page of the filtered fleet. `total` counts the post-filter,
/// pre-pagination sequence.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationPage {
    pub data: Vec<Station>,
    pub total: usize,
    pub page: u32,
    pub limit: u32,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateStationRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub max_power: Option<f64>,
    pub charger_count: Option<u32>,
}

impl CreateStationRequest {
    fn into_draft(self) -> Result<StationDraft, StationError> {
        let (Some(name), Some(address), Some(max_power), Some(charger_count)) =
            (self.name, self.address, self.max_power, self.charger_count)
        else {
            return Err(StationError::MissingFields);
        };
        if name.is_empty() || address.is_empty() {
            return Err(StationError::MissingFields);
        }

        Ok(StationDraft {
            name,
            address,
            max_power,
            charger_count,
        })
    }
}

fn parse_or(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|v| v.parse().ok())
        .filter(|n| *n > 0)
        .unwrap_or(default)
}

#[derive(Clone, Copy)]
enum SortField {
    Power,
    Energy,
    Ports,
}

/// Sort in place per a `"<field>_<order>"` spec.
///
/// Field maps power/energy/ports onto the numeric columns; any order token
/// other than `asc` sorts descending. An unrecognized field leaves the
/// original relative order untouched, and ties keep it too (stable sort).
fn apply_sort(stations: &mut [Station], spec: &str) {
    let (field, order) = spec.split_once('_').unwrap_or((spec, ""));
    let field = match field {
        "power" => SortField::Power,
        "energy" => SortField::Energy,
        "ports" => SortField::Ports,
        _ => return,
    };

    let key = |s: &Station| -> f64 {
        match field {
            SortField::Power => s.max_power,
            SortField::Energy => s.total_energy,
            SortField::Ports => s.charger_count as f64,
        }
    };

    if order == "asc" {
        stations.sort_by(|a, b| key(a).total_cmp(&key(b)));
    } else {
        stations.sort_by(|a, b| key(b).total_cmp(&key(a)));
    }
}

/// List the fleet with optional status filter, sort and pagination
pub async fn list_stations(
    State(app_state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Json<StationPage> {
    tracing::info!("Listing stations");
    let mut result = app_state.store.lock().unwrap().all();

    if let Some(status) = &query.status {
        result.retain(|s| s.status.as_str() == status);
    }

    if let Some(sort) = query.sort.as_deref() {
        apply_sort(&mut result, sort);
    }

    let page = parse_or(query.page.as_deref(), 1);
    let limit = parse_or(query.limit.as_deref(), app_state.config.default_page_size);
    let total = result.len();

    let start = (page as usize - 1).saturating_mul(limit as usize);
    let data = result
        .into_iter()
        .skip(start)
        .take(limit as usize)
        .collect();

    Json(StationPage {
        data,
        total,
        page,
        limit,
    })
}

/// Fetch a single station by id
pub async fn get_station(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<StationId>,
) -> impl IntoResponse {
    let store = app_state.store.lock().unwrap();
    match store.get(id) {
        Some(station) => (StatusCode::OK, Json(station.clone())).into_response(),
        None => {
            station_error_to_response(StationError::StationNotFound { station_id: id })
                .into_response()
        }
    }
}

/// Register a new station
pub async fn create_station(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<CreateStationRequest>,
) -> impl IntoResponse {
    let draft = match payload.into_draft() {
        Ok(draft) => draft,
        Err(error) => return station_error_to_response(error).into_response(),
    };

    let mut store = app_state.store.lock().unwrap();
    match store.create(draft) {
        Ok(station) => (StatusCode::CREATED, Json(station)).into_response(),
        Err(error) => station_error_to_response(error).into_response(),
    }
}

/// Administrative partial update, e.g. toggling a station offline
pub async fn update_station(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<StationId>,
    Json(patch): Json<StationPatch>,
) -> impl IntoResponse {
    let mut store = app_state.store.lock().unwrap();
    match store.update(id, patch) {
        Ok(station) => (StatusCode::OK, Json(station)).into_response(),
        Err(error) => station_error_to_response(error).into_response(),
    }
}
