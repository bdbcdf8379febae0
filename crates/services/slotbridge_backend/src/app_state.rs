// --- File: crates/services/slotbridge_backend/src/app_state.rs ---
use slotbridge_config::AppConfig;
use slotbridge_slots::{BookingCoordinator, HttpSlotService, SlotService};
use std::sync::Arc;
use tracing::info;

/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub coordinator: Arc<BookingCoordinator>,
}

impl AppState {
    /// Wires the coordinator to an already constructed slot service.
    pub fn new(config: Arc<AppConfig>, slot_service: Arc<dyn SlotService>) -> Self {
        Self {
            config,
            coordinator: Arc::new(BookingCoordinator::new(slot_service)),
        }
    }

    /// Builds the HTTP slot service from configuration.
    ///
    /// Fails only if the HTTP client cannot be constructed.
    pub fn from_config(config: Arc<AppConfig>) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let slot_service = HttpSlotService::new(&config.slot_service)?;
        info!(
            "Slot service at {} (timeout {}s)",
            config.slot_service.base_url, config.slot_service.timeout_secs
        );
        Ok(Self::new(config, Arc::new(slot_service)))
    }
}
