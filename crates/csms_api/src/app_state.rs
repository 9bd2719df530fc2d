use std::sync::Mutex;

use csms_core::StationStore;

use crate::config::ApiConfig;

/// Shared state handed to every request handler.
#[derive(Debug)]
pub struct AppState {
    /// The mutable station fleet. The single mutex serializes every
    /// read-modify-write, so decrement-then-check sequences are atomic
    /// across requests.
    pub store: Mutex<StationStore>,
    /// Runtime configuration fixed at startup.
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(store: StationStore, config: ApiConfig) -> Self {
        AppState {
            store: Mutex::new(store),
            config,
        }
    }
}
