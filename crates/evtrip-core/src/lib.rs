//! evtrip-core - Core types and the trip-time estimator
//!
//! This crate holds the pure estimation logic and the `TripCalculator`
//! abstraction that lets the HTTP façade compute a trip time either locally
//! or through the SOAP endpoint.
//!
//! # Example
//!
//! ```rust
//! use evtrip_core::estimate;
//!
//! // 300 km, 200 km of autonomy, 30 minutes per recharge
//! let result = estimate(300.0, 200.0, 30.0).unwrap();
//! assert_eq!(result.trip_time, 3.5);
//! ```

pub mod calculator;
pub mod error;
pub mod estimator;
pub mod models;

pub use calculator::{LocalCalculator, TripCalculator};
pub use error::{CalcError, CalcResult};
pub use estimator::{breakdown, estimate, AVERAGE_SPEED_KMH};
pub use models::{TripBreakdown, TripRequest, TripResult};
