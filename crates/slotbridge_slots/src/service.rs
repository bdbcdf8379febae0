// --- File: crates/slotbridge_slots/src/service.rs ---
//! Client for the upstream slot service.
//!
//! The rest of the crate only sees the [`SlotService`] trait, so tests can
//! swap in a mock and the HTTP details stay in [`HttpSlotService`].

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use slotbridge_common::create_client;
use slotbridge_config::SlotServiceConfig;
use tracing::{debug, error, info};

use crate::dates::WeekKey;
use crate::error::{UpstreamError, FETCH_WEEK_OPERATION, TAKE_SLOT_OPERATION};
use crate::models::{TakeSlotOutcome, TakeSlotRequest, WeeklyAvailability};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SlotService: Send + Sync {
    /// Availability of the facility for the week starting on `week`'s Monday.
    async fn get_weekly_availability(
        &self,
        week: WeekKey,
    ) -> Result<WeeklyAvailability, UpstreamError>;

    /// Ask the service to reserve a slot.
    async fn take_slot(&self, request: TakeSlotRequest) -> Result<TakeSlotOutcome, UpstreamError>;
}

/// [`SlotService`] over HTTP with basic authentication.
#[derive(Clone)]
pub struct HttpSlotService {
    client: Client,
    base_url: String,
    username: String,
    password: String,
}

impl HttpSlotService {
    /// Build the service with its own pooled client using the configured timeout.
    pub fn new(config: &SlotServiceConfig) -> Result<Self, reqwest::Error> {
        let client = create_client(config.timeout_secs, true)?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: &SlotServiceConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// Sends the request and returns the body of a 2xx response.
    /// Anything else is logged with its full diagnostics and turned into an [`UpstreamError`].
    async fn execute(
        &self,
        request: RequestBuilder,
        operation: &'static str,
    ) -> Result<String, UpstreamError> {
        let response = request
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(|source| {
                error!("Request failed while {}: {}", operation, source);
                UpstreamError::Transport { operation, source }
            })?;

        let status = response.status();
        if !status.is_success() {
            let details = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error details".to_string());
            let reason = status.canonical_reason().unwrap_or_default().to_string();
            error!(
                "Error {}. Status code: {}, Reason: {}, Error details: {}",
                operation,
                status.as_u16(),
                reason,
                details
            );
            return Err(UpstreamError::Status {
                operation,
                status: status.as_u16(),
                reason,
            });
        }

        response.text().await.map_err(|source| {
            error!("Failed to read response body while {}: {}", operation, source);
            UpstreamError::Transport { operation, source }
        })
    }
}

/// Interprets the body of a 2xx `TakeSlot` response.
///
/// Empty means the slot was taken. Anything else is the reason it was not;
/// a JSON string body is unquoted, other bodies are kept verbatim.
pub fn interpret_take_slot_body(body: &str) -> TakeSlotOutcome {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return TakeSlotOutcome::Taken;
    }
    match serde_json::from_str::<String>(trimmed) {
        Ok(message) if message.trim().is_empty() => TakeSlotOutcome::Taken,
        Ok(message) => TakeSlotOutcome::Declined(message),
        Err(_) => TakeSlotOutcome::Declined(trimmed.to_string()),
    }
}

#[async_trait]
impl SlotService for HttpSlotService {
    async fn get_weekly_availability(
        &self,
        week: WeekKey,
    ) -> Result<WeeklyAvailability, UpstreamError> {
        let url = self.url(&format!("GetWeeklyAvailability/{week}"));
        debug!("Fetching weekly availability from {}", url);

        let body = self
            .execute(self.client.get(&url), FETCH_WEEK_OPERATION)
            .await?;

        serde_json::from_str(&body).map_err(|source| {
            error!(
                "Could not decode weekly availability for week {}: {}. Body: {}",
                week, source, body
            );
            UpstreamError::Decode {
                operation: FETCH_WEEK_OPERATION,
                source,
            }
        })
    }

    async fn take_slot(&self, request: TakeSlotRequest) -> Result<TakeSlotOutcome, UpstreamError> {
        let url = self.url("TakeSlot");
        info!(
            "Taking slot {} - {} for facility {}",
            request.start, request.end, request.facility_id
        );

        let body = self
            .execute(self.client.post(&url).json(&request), TAKE_SLOT_OPERATION)
            .await?;

        Ok(interpret_take_slot_body(&body))
    }
}
