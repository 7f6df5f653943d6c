//! Encoding messages to SOAP envelopes

use evtrip_core::{TripRequest, TripResult};
use quick_xml::escape::escape;

use crate::fault::Fault;
use crate::{ENVELOPE_NS, REQUEST_ELEMENT, RESPONSE_ELEMENT, SERVICE_NS};

/// Format an f64 in the xsd:double lexical space.
///
/// Finite values use the shortest representation that round-trips.
pub fn format_double(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "INF".to_string()
    } else if value == f64::NEG_INFINITY {
        "-INF".to_string()
    } else {
        value.to_string()
    }
}

/// Encode a `calculateTripTimeRequest` envelope
pub fn encode_request(request: &TripRequest) -> String {
    envelope(&format!(
        "<tns:{el}><tns:distance>{}</tns:distance><tns:autonomy>{}</tns:autonomy>\
         <tns:chargingTime>{}</tns:chargingTime></tns:{el}>",
        format_double(request.distance),
        format_double(request.autonomy),
        format_double(request.charging_time),
        el = REQUEST_ELEMENT,
    ))
}

/// Encode a `calculateTripTimeResponse` envelope
pub fn encode_response(result: &TripResult) -> String {
    envelope(&format!(
        "<tns:{el}><tns:tripTime>{}</tns:tripTime></tns:{el}>",
        format_double(result.trip_time),
        el = RESPONSE_ELEMENT,
    ))
}

/// Encode a SOAP 1.1 fault envelope
pub fn encode_fault(fault: &Fault) -> String {
    envelope(&format!(
        "<soap:Fault><faultcode>{}</faultcode><faultstring>{}</faultstring></soap:Fault>",
        fault.code.as_qname(),
        escape(fault.message.as_str()),
    ))
}

fn envelope(body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
         <soap:Envelope xmlns:soap=\"{}\" xmlns:tns=\"{}\">\
         <soap:Body>{}</soap:Body></soap:Envelope>",
        ENVELOPE_NS, SERVICE_NS, body
    )
}
