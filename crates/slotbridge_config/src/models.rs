// --- File: crates/slotbridge_config/src/models.rs ---

use serde::{Deserialize, Serialize};

fn default_timeout_secs() -> u64 {
    30
}

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Upstream Slot Service Config ---
// The password is normally `secret_from_env` in the config file and resolved
// from SLOT_SERVICE_PASSWORD at load time.
#[derive(Deserialize, Serialize, Clone)]
pub struct SlotServiceConfig {
    /// Base address of the slot service, e.g. `https://slots.example.com/api/availability`
    pub base_url: String,
    pub username: String,
    pub password: String,
    /// Per-request timeout for outbound calls.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for SlotServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlotServiceConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"***")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,
    pub slot_service: SlotServiceConfig,
}
