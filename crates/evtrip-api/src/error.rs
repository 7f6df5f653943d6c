//! API error types and conversions

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use evtrip_core::CalcError;
use evtrip_soap::{Fault, FaultCode};
use serde::Serialize;

/// Message returned for every internal failure of the JSON façade
pub const TRIP_TIME_FAILED: &str = "failed to calculate trip time";

/// API error type that converts to HTTP responses
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request
    BadRequest(String),
    /// 500 Internal Server Error
    Internal(String),
    /// SOAP fault, rendered as an XML envelope
    Soap(Fault),
}

/// JSON error body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::Soap(fault) => return soap_fault_response(fault),
        };

        if status.is_server_error() {
            tracing::error!(%message, "API error");
        } else {
            tracing::debug!(%message, "API client error");
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// SOAP 1.1 carries every fault with status 500
fn soap_fault_response(fault: Fault) -> Response {
    match fault.code {
        FaultCode::Client => tracing::debug!(message = %fault.message, "SOAP client fault"),
        FaultCode::Server => tracing::error!(message = %fault.message, "SOAP server fault"),
    }

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, evtrip_soap::CONTENT_TYPE)],
        evtrip_soap::encode_fault(&fault),
    )
        .into_response()
}

impl From<CalcError> for ApiError {
    fn from(err: CalcError) -> Self {
        match err {
            CalcError::InvalidArgument(msg) => ApiError::BadRequest(msg),
            CalcError::Upstream(_) | CalcError::Timeout => {
                ApiError::Internal(TRIP_TIME_FAILED.to_string())
            }
        }
    }
}
