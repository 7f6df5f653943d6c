//! evtrip-soap - SOAP codec for the trip-time service
//!
//! Encodes and decodes the document/literal envelopes of the
//! `calculateTripTime` operation, SOAP 1.1 faults, and renders the WSDL
//! contract that describes them.
//!
//! # Quick Start
//!
//! ```rust
//! use evtrip_core::{TripRequest, TripResult};
//! use evtrip_soap::{decode_request, decode_response, encode_request, encode_response};
//!
//! let xml = encode_request(&TripRequest::new(300.0, 200.0, 30.0));
//! let request = decode_request(&xml).unwrap();
//! assert_eq!(request.charging_time, 30.0);
//!
//! let xml = encode_response(&TripResult { trip_time: 3.5 });
//! assert_eq!(decode_response(&xml).unwrap().trip_time, 3.5);
//! ```
//!
//! Decoding matches elements by local name, so any namespace prefix the
//! caller picks (`soap:`, `soapenv:`, `tns:` or none) is accepted.

pub mod decode;
pub mod encode;
pub mod error;
pub mod fault;
pub mod wsdl;

pub use decode::{decode_fault, decode_request, decode_response};
pub use encode::{encode_fault, encode_request, encode_response, format_double};
pub use error::{SoapError, SoapResult};
pub use fault::{Fault, FaultCode};
pub use wsdl::wsdl_document;

/// SOAP 1.1 envelope namespace
pub const ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Target namespace of the trip service
pub const SERVICE_NS: &str = "http://example.com/tripService";

/// SOAPAction of the `calculateTripTime` operation
pub const SOAP_ACTION: &str = "http://example.com/tripService#calculateTripTime";

/// Content type of SOAP 1.1 messages
pub const CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// Name of the only operation exposed by the service
pub const OPERATION: &str = "calculateTripTime";

pub(crate) const REQUEST_ELEMENT: &str = "calculateTripTimeRequest";
pub(crate) const RESPONSE_ELEMENT: &str = "calculateTripTimeResponse";
