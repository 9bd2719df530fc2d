use serde::{Deserialize, Serialize};

pub type StationId = u32;

/// Operational state of a station as reported on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StationStatus {
    Active,
    Busy,
    Offline,
}

impl StationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            StationStatus::Active => "active",
            StationStatus::Busy => "busy",
            StationStatus::Offline => "offline",
        }
    }
}

impl std::fmt::Display for StationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub address: String,
    /// Rated power in kW
    pub max_power: f64,
    /// Total charger ports
    pub charger_count: u32,
    /// Free ports, 0..=charger_count under session operations
    pub available_chargers: u32,
    /// Cumulative delivered energy in kWh
    pub total_energy: f64,
    pub status: StationStatus,
}

/// Input for creating a station. Range checks happen in the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationDraft {
    pub name: String,
    pub address: String,
    pub max_power: f64,
    pub charger_count: u32,
}

/// Partial update shallow-merged over an existing record.
///
/// Absent fields keep their current value. Merged fields are not validated,
/// so a patch may leave `available_chargers` above `charger_count`; the
/// administrative frontend only toggles `status`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StationPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub max_power: Option<f64>,
    pub charger_count: Option<u32>,
    pub available_chargers: Option<u32>,
    pub total_energy: Option<f64>,
    pub status: Option<StationStatus>,
}
