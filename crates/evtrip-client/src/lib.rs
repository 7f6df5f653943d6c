//! evtrip client library
//!
//! Typed HTTP client for the trip-time service: the SOAP
//! `calculateTripTime` operation and the JSON façade.
//!
//! # Example
//!
//! ```rust,no_run
//! use evtrip_client::TripClient;
//! use evtrip_core::TripRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TripClient::new("http://localhost:3000")?;
//!
//!     // SOAP round trip
//!     let result = client
//!         .calculate_trip_time(&TripRequest::new(300.0, 200.0, 30.0))
//!         .await?;
//!     assert_eq!(result.trip_time, 3.5);
//!
//!     // JSON façade
//!     let result = client.trip_time(300.0, 200.0, 30.0).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Testing
//!
//! ```rust,ignore
//! use evtrip_client::testing::TestServer;
//! use evtrip_api::{create_router, AppState};
//!
//! let server = TestServer::start(create_router(AppState::local())).await?;
//! let wsdl = server.client.fetch_wsdl().await?;
//! ```

mod client;
mod error;
pub mod testing;

pub use client::{TripClient, DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT};
pub use error::{Result, TripClientError};

// Re-export core types for convenience
pub use evtrip_core::{TripRequest, TripResult};
