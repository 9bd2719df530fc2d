use serde::{Deserialize, Serialize};

/// Page size applied when a list request does not specify `limit`.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Runtime configuration for the API server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiConfig {
    pub default_page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
