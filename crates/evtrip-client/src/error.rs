//! Error types for evtrip client operations

use evtrip_core::CalcError;
use evtrip_soap::{Fault, FaultCode, SoapError};
use thiserror::Error;

/// Result type alias for evtrip client operations
pub type Result<T> = std::result::Result<T, TripClientError>;

/// Errors that can occur during evtrip client operations
#[derive(Error, Debug)]
pub enum TripClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Server returned an error response
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The server rejected the arguments
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The SOAP endpoint answered with a server fault
    #[error("SOAP fault: {0}")]
    Fault(String),

    /// Timeout
    #[error("Request timed out")]
    Timeout,
}

impl TripClientError {
    /// Create a server error from status code and message
    pub fn server_error(status: u16, message: impl Into<String>) -> Self {
        Self::ServerError {
            status,
            message: message.into(),
        }
    }

    /// Classify a transport error, keeping timeouts distinct
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::HttpError(err)
        }
    }
}

impl From<Fault> for TripClientError {
    fn from(fault: Fault) -> Self {
        match fault.code {
            FaultCode::Client => Self::InvalidArgument(fault.message),
            FaultCode::Server => Self::Fault(fault.message),
        }
    }
}

impl From<SoapError> for TripClientError {
    fn from(err: SoapError) -> Self {
        Self::ParseError(err.to_string())
    }
}

impl From<TripClientError> for CalcError {
    fn from(err: TripClientError) -> Self {
        match err {
            TripClientError::InvalidArgument(msg) => CalcError::InvalidArgument(msg),
            TripClientError::Timeout => CalcError::Timeout,
            other => CalcError::Upstream(other.to_string()),
        }
    }
}
