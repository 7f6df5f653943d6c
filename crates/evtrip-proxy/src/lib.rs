//! evtrip-proxy - SOAP-backed TripCalculator
//!
//! Implements `TripCalculator` by calling a SOAP `calculateTripTime`
//! endpoint through `TripClient`. Pointed at the process's own endpoint, it
//! gives the JSON façade the self-hosted client/server round trip.

mod proxy;

pub use proxy::SoapCalculator;
