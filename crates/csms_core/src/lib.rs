mod models;

pub use crate::models::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StationError {
    #[error("Station not found")]
    StationNotFound { station_id: StationId },
    #[error("Missing required fields")]
    MissingFields,
    #[error("Max power must be between 50 and 500 kW")]
    MaxPowerOutOfRange,
    #[error("Charger count must be between 1 and 10")]
    ChargerCountOutOfRange,
    #[error("Consumed energy must be between 1 and 300 kWh")]
    ConsumedEnergyOutOfRange,
    #[error("No chargers available")]
    NoChargersAvailable { station_id: StationId },
    #[error("All chargers are already free")]
    AllChargersFree { station_id: StationId },
}

/// Ordered collection of station records plus the id counter stamping them.
///
/// Insertion order is preserved; ids are never reused while the process
/// runs. The store exclusively owns its records, handlers work on clones.
#[derive(Debug, Clone)]
pub struct StationStore {
    stations: Vec<Station>,
    next_id: StationId,
}

impl StationStore {
    pub fn new() -> Self {
        StationStore {
            stations: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a store from an explicit fleet, e.g. a seed file.
    ///
    /// The id counter starts one past the highest seeded id.
    pub fn with_stations(stations: Vec<Station>) -> Self {
        let next_id = stations.iter().map(|s| s.id).max().map_or(1, |id| id + 1);
        StationStore { stations, next_id }
    }

    /// Built-in three-station demo fleet used when no seed file is given.
    pub fn seeded() -> Self {
        Self::with_stations(vec![
            Station {
                id: 1,
                name: "Harbor Street Hub".into(),
                address: "12 Harbor Street".into(),
                max_power: 150.0,
                charger_count: 4,
                available_chargers: 4,
                total_energy: 1200.0,
                status: StationStatus::Active,
            },
            Station {
                id: 2,
                name: "Grand Avenue Fast Charge".into(),
                address: "88 Grand Avenue".into(),
                max_power: 50.0,
                charger_count: 2,
                available_chargers: 0,
                total_energy: 450.0,
                status: StationStatus::Busy,
            },
            Station {
                id: 3,
                name: "Eastgate Park".into(),
                address: "3 Eastgate Road".into(),
                max_power: 120.0,
                charger_count: 6,
                available_chargers: 2,
                total_energy: 3400.0,
                status: StationStatus::Active,
            },
        ])
    }

    /// Snapshot copy of the fleet. Mutating it does not touch the store.
    pub fn all(&self) -> Vec<Station> {
        self.stations.clone()
    }

    pub fn get(&self, id: StationId) -> Option<&Station> {
        self.stations.iter().find(|s| s.id == id)
    }

    fn get_mut(&mut self, id: StationId) -> Result<&mut Station, StationError> {
        self.stations
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(StationError::StationNotFound { station_id: id })
    }

    /// Validate ranges, stamp the next id and append a fresh record.
    ///
    /// New stations start fully free: `available_chargers == charger_count`,
    /// no delivered energy, status active.
    pub fn create(&mut self, draft: StationDraft) -> Result<Station, StationError> {
        if !(50.0..=500.0).contains(&draft.max_power) {
            return Err(StationError::MaxPowerOutOfRange);
        }
        if !(1..=10).contains(&draft.charger_count) {
            return Err(StationError::ChargerCountOutOfRange);
        }

        let station = Station {
            id: self.next_id,
            name: draft.name,
            address: draft.address,
            max_power: draft.max_power,
            charger_count: draft.charger_count,
            available_chargers: draft.charger_count,
            total_energy: 0.0,
            status: StationStatus::Active,
        };
        self.next_id += 1;

        tracing::info!("Created station {} ({})", station.id, station.name);
        self.stations.push(station.clone());
        Ok(station)
    }

    /// Shallow-merge the patch into the matching record.
    ///
    /// No field validation, per the administrative update contract.
    pub fn update(&mut self, id: StationId, patch: StationPatch) -> Result<Station, StationError> {
        let station = self.get_mut(id)?;

        if let Some(name) = patch.name {
            station.name = name;
        }
        if let Some(address) = patch.address {
            station.address = address;
        }
        if let Some(max_power) = patch.max_power {
            station.max_power = max_power;
        }
        if let Some(charger_count) = patch.charger_count {
            station.charger_count = charger_count;
        }
        if let Some(available_chargers) = patch.available_chargers {
            station.available_chargers = available_chargers;
        }
        if let Some(total_energy) = patch.total_energy {
            station.total_energy = total_energy;
        }
        if let Some(status) = patch.status {
            station.status = status;
        }

        tracing::info!("Updated station {}", id);
        Ok(station.clone())
    }

    /// Occupy one charger port.
    pub fn start_session(&mut self, id: StationId) -> Result<Station, StationError> {
        tracing::info!("Starting session at station {}", id);
        let station = self.get_mut(id)?;

        if station.available_chargers == 0 {
            return Err(StationError::NoChargersAvailable { station_id: id });
        }

        station.available_chargers -= 1;
        if station.available_chargers == 0 {
            station.status = StationStatus::Busy;
        }

        Ok(station.clone())
    }

    /// Free one charger port and record the energy the session delivered.
    pub fn stop_session(&mut self, id: StationId, kwh: f64) -> Result<Station, StationError> {
        tracing::info!("Stopping session at station {} ({} kWh)", id, kwh);
        let station = self.get_mut(id)?;

        if !(1.0..=300.0).contains(&kwh) {
            return Err(StationError::ConsumedEnergyOutOfRange);
        }
        if station.available_chargers >= station.charger_count {
            return Err(StationError::AllChargersFree { station_id: id });
        }

        station.available_chargers += 1;
        station.total_energy += kwh;
        if station.status == StationStatus::Busy {
            station.status = StationStatus::Active;
        }

        Ok(station.clone())
    }
}

impl Default for StationStore {
    fn default() -> Self {
        Self::new()
    }
}
