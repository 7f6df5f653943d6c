//! SOAP endpoint and WSDL handlers

use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::IntoResponse;
use bytes::Bytes;
use evtrip_soap::{Fault, SOAP_ACTION};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /wsdl
/// Return the WSDL contract (`/wsdl?wsdl` is the conventional form)
pub async fn get_wsdl(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, evtrip_soap::CONTENT_TYPE)],
        evtrip_soap::wsdl_document(state.soap_location()),
    )
}

/// POST /wsdl
/// SOAP `calculateTripTime` operation
///
/// This is the server side of the service: it always runs the estimator
/// in-process, whatever calculator backs the JSON façade.
pub async fn calculate_trip_time(
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    if let Some(action) = headers.get("soapaction").and_then(|v| v.to_str().ok()) {
        let action = action.trim_matches('"');
        if !action.is_empty() && action != SOAP_ACTION {
            debug!(%action, "Unexpected SOAPAction, dispatching on body element");
        }
    }

    let xml = std::str::from_utf8(&body)
        .map_err(|_| ApiError::Soap(Fault::client("request body is not valid UTF-8")))?;

    let request = evtrip_soap::decode_request(xml)
        .map_err(|e| ApiError::Soap(Fault::client(e.to_string())))?;

    let result = request.estimate().map_err(|e| {
        if e.is_invalid_argument() {
            ApiError::Soap(Fault::client(invalid_message(e)))
        } else {
            ApiError::Soap(Fault::server(e.to_string()))
        }
    })?;

    Ok((
        [(header::CONTENT_TYPE, evtrip_soap::CONTENT_TYPE)],
        evtrip_soap::encode_response(&result),
    ))
}

/// The bare validation message, without the error kind prefix
fn invalid_message(err: evtrip_core::CalcError) -> String {
    match err {
        evtrip_core::CalcError::InvalidArgument(msg) => msg,
        other => other.to_string(),
    }
}
