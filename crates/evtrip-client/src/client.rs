//! evtrip HTTP client implementation

use std::time::Duration;

use evtrip_core::{TripRequest, TripResult};
use evtrip_soap::SOAP_ACTION;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;

use crate::error::{Result, TripClientError};

/// Default request timeout; bounds every SOAP round trip
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
/// Default connection timeout
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

const SOAP_PATH: &str = "/wsdl";
const TRIP_TIME_PATH: &str = "/api/trip-time";

/// JSON error body of the façade
#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Client for the trip-time service
#[derive(Debug, Clone)]
pub struct TripClient {
    client: Client,
    base_url: Url,
}

impl TripClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the service (e.g., "http://localhost:3000")
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(base_url, DEFAULT_TIMEOUT, DEFAULT_CONNECT_TIMEOUT)
    }

    /// Create a new client with custom timeouts
    pub fn with_config(
        base_url: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        let base_url = Url::parse(base_url)?;

        Ok(Self { client, base_url })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // =========================================================================
    // Health Check
    // =========================================================================

    /// Check server health
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<String> {
        let url = self.base_url.join("/health")?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(TripClientError::from_transport)?;

        if response.status().is_success() {
            Ok(response.text().await?)
        } else {
            Err(self.extract_error(response).await)
        }
    }

    // =========================================================================
    // SOAP Operations
    // =========================================================================

    /// Call the SOAP `calculateTripTime` operation
    ///
    /// A `soap:Client` fault is returned as [`TripClientError::InvalidArgument`]
    /// carrying the fault string.
    #[instrument(skip(self))]
    pub async fn calculate_trip_time(&self, request: &TripRequest) -> Result<TripResult> {
        let url = self.base_url.join(SOAP_PATH)?;
        debug!("Calling calculateTripTime at {}", url);

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, evtrip_soap::CONTENT_TYPE)
            .header("SOAPAction", format!("\"{}\"", SOAP_ACTION))
            .body(evtrip_soap::encode_request(request))
            .send()
            .await
            .map_err(TripClientError::from_transport)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(TripClientError::from_transport)?;

        if status.is_success() {
            return Ok(evtrip_soap::decode_response(&body)?);
        }

        // Faults come back as 500 with an envelope; anything else is a plain HTTP error
        match evtrip_soap::decode_fault(&body) {
            Ok(Some(fault)) => Err(fault.into()),
            _ => Err(TripClientError::server_error(
                status.as_u16(),
                format!("HTTP {}", status),
            )),
        }
    }

    /// Fetch the WSDL contract
    #[instrument(skip(self))]
    pub async fn fetch_wsdl(&self) -> Result<String> {
        let mut url = self.base_url.join(SOAP_PATH)?;
        url.set_query(Some("wsdl"));

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(TripClientError::from_transport)?;

        if response.status().is_success() {
            Ok(response.text().await?)
        } else {
            Err(self.extract_error(response).await)
        }
    }

    // =========================================================================
    // JSON Façade
    // =========================================================================

    /// Call the JSON façade `GET /api/trip-time`
    #[instrument(skip(self))]
    pub async fn trip_time(
        &self,
        distance: f64,
        autonomy: f64,
        charging_time: f64,
    ) -> Result<TripResult> {
        let mut url = self.base_url.join(TRIP_TIME_PATH)?;
        url.query_pairs_mut()
            .append_pair("distance", &distance.to_string())
            .append_pair("autonomy", &autonomy.to_string())
            .append_pair("chargingTime", &charging_time.to_string());

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(TripClientError::from_transport)?;
        self.handle_response(response).await
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Handle response and parse JSON
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| TripClientError::ParseError(e.to_string()))
        } else {
            Err(self.extract_error_from_status(response, status).await)
        }
    }

    /// Extract error from failed response
    async fn extract_error(&self, response: reqwest::Response) -> TripClientError {
        let status = response.status();
        self.extract_error_from_status(response, status).await
    }

    async fn extract_error_from_status(
        &self,
        response: reqwest::Response,
        status: StatusCode,
    ) -> TripClientError {
        let message = match response.json::<ErrorResponse>().await {
            Ok(err) => err.error,
            Err(_) => format!("HTTP {}", status),
        };

        match status {
            StatusCode::BAD_REQUEST => TripClientError::InvalidArgument(message),
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => TripClientError::Timeout,
            _ => TripClientError::server_error(status.as_u16(), message),
        }
    }
}
