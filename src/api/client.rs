// ABOUTME: HTTP client for the studio backend with bounded timeouts; submission
// ABOUTME: failures keep the server's own wording for the error modal

use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use super::types::{
    ApiErrorBody, AuthStatus, BookingAccepted, BookingRequest, LogoutReply, ServicePayload,
};
use crate::booking::Service;
use crate::config::AppConfig;

/// Why a booking submission did not go through. `Rejected` carries the
/// backend's reason verbatim for the error modal; everything else
/// collapses into the generic retry message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("{0}")]
    Rejected(String),
    #[error("Failed to submit booking. Please try again.")]
    Failed,
}

#[derive(Debug, Clone)]
pub struct BookingApiClient {
    client: Client,
    base_url: String,
}

impl BookingApiClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("lotus-tui/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(&config.api.base_url, config.api.timeout_secs)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the service catalog. Callers substitute the fallback catalog
    /// on any error here; load failures never reach the user.
    pub async fn fetch_services(&self) -> Result<Vec<Service>> {
        let url = format!("{}/booking/services", self.base_url);
        debug!("Fetching service catalog from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to reach the booking service endpoint")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Service catalog request failed {status}: {error_text}");
        }

        let payloads: Vec<ServicePayload> = response
            .json()
            .await
            .context("Failed to parse service catalog response")?;

        debug!("Loaded {} services from backend", payloads.len());
        Ok(payloads
            .into_iter()
            .map(ServicePayload::into_service)
            .collect())
    }

    /// Submit a booking. A non-success reply with a readable `error` field
    /// becomes `SubmitError::Rejected` with that exact text.
    pub async fn create_booking(
        &self,
        request: &BookingRequest,
    ) -> Result<BookingAccepted, SubmitError> {
        let url = format!("{}/booking/events", self.base_url);
        debug!(
            "Submitting booking for service {} starting {}",
            request.service_id, request.start_time
        );

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|err| {
                warn!("Booking submission failed in transit: {}", err);
                SubmitError::Failed
            })?;

        let status = response.status();
        if status.is_success() {
            return response.json::<BookingAccepted>().await.map_err(|err| {
                warn!("Booking accepted but reply was unreadable: {}", err);
                SubmitError::Failed
            });
        }

        let body = response.text().await.unwrap_or_default();
        warn!("Booking rejected with {}: {}", status, body);
        match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(ApiErrorBody { error: Some(message) }) => Err(SubmitError::Rejected(message)),
            _ => Err(SubmitError::Failed),
        }
    }

    /// Whether a studio account session is active. Display-only; errors
    /// are treated as logged out.
    pub async fn auth_status(&self) -> Result<bool> {
        let url = format!("{}/auth/status", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to reach the auth status endpoint")?;

        if !response.status().is_success() {
            anyhow::bail!("Auth status request failed {}", response.status());
        }

        let status: AuthStatus = response
            .json()
            .await
            .context("Failed to parse auth status response")?;
        Ok(status.logged_in)
    }

    /// End the studio account session. Ok only when the backend confirms
    /// with a message, matching the web client's reload condition.
    pub async fn logout(&self) -> Result<()> {
        let url = format!("{}/auth/logout", self.base_url);
        let response = self
            .client
            .post(&url)
            .send()
            .await
            .context("Failed to reach the logout endpoint")?;

        if !response.status().is_success() {
            anyhow::bail!("Logout request failed {}", response.status());
        }

        let reply: LogoutReply = response
            .json()
            .await
            .context("Failed to parse logout response")?;
        match reply.message {
            Some(message) => {
                debug!("Logged out: {}", message);
                Ok(())
            }
            None => anyhow::bail!("Logout reply carried no confirmation"),
        }
    }
}
