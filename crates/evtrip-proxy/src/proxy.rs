//! SoapCalculator - TripCalculator that proxies to a SOAP endpoint

use std::time::Duration;

use async_trait::async_trait;
use evtrip_client::{TripClient, TripClientError, DEFAULT_CONNECT_TIMEOUT};
use evtrip_core::{CalcError, CalcResult, TripCalculator, TripRequest, TripResult};
use tracing::{debug, warn};

/// A `TripCalculator` that performs every calculation as a SOAP call.
///
/// No retries: a failed call surfaces immediately as
/// `CalcError::Upstream` or `CalcError::Timeout`.
pub struct SoapCalculator {
    client: TripClient,
    name: String,
}

impl SoapCalculator {
    /// Create a calculator for the service at `base_url`, with the client's
    /// default timeout.
    pub fn new(base_url: &str) -> Result<Self, TripClientError> {
        let client = TripClient::new(base_url)?;
        Ok(Self::from_client(client))
    }

    /// Create a calculator whose round trips are bounded by `timeout`
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, TripClientError> {
        let connect_timeout = timeout.min(DEFAULT_CONNECT_TIMEOUT);
        let client = TripClient::with_config(base_url, timeout, connect_timeout)?;
        Ok(Self::from_client(client))
    }

    /// Wrap an existing client
    pub fn from_client(client: TripClient) -> Self {
        let name = format!("soap({})", client.base_url());
        Self { client, name }
    }

    /// Get the underlying client
    pub fn client(&self) -> &TripClient {
        &self.client
    }
}

#[async_trait]
impl TripCalculator for SoapCalculator {
    fn name(&self) -> &str {
        &self.name
    }

    async fn calculate_trip_time(&self, request: &TripRequest) -> CalcResult<TripResult> {
        debug!(upstream = %self.client.base_url(), ?request, "Forwarding to SOAP endpoint");

        self.client
            .calculate_trip_time(request)
            .await
            .map_err(|e| {
                if !matches!(e, TripClientError::InvalidArgument(_)) {
                    warn!(upstream = %self.client.base_url(), error = %e, "SOAP call failed");
                }
                CalcError::from(e)
            })
    }
}
