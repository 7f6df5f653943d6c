//! evtrip-api - HTTP layer of the trip-time service
//!
//! Serves, on a single router:
//! - `POST /wsdl`: the SOAP `calculateTripTime` endpoint
//! - `GET /wsdl`: the WSDL contract (`/wsdl?wsdl`)
//! - `GET /api/trip-time`: the JSON façade, backed by a [`TripCalculator`]
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use evtrip_api::{create_router, AppState};
//! use evtrip_core::LocalCalculator;
//!
//! let state = AppState::new(Arc::new(LocalCalculator::new()));
//! let router = create_router(state);
//! ```
//!
//! [`TripCalculator`]: evtrip_core::TripCalculator

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Path of the SOAP endpoint and of the WSDL
pub const SOAP_PATH: &str = "/wsdl";

/// Path of the JSON façade
pub const TRIP_TIME_PATH: &str = "/api/trip-time";

/// Create the evtrip router with the given application state
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(|| async { "Welcome" }))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // SOAP endpoint and its contract
        .route(
            SOAP_PATH,
            get(handlers::soap::get_wsdl).post(handlers::soap::calculate_trip_time),
        )
        // JSON façade
        .route(TRIP_TIME_PATH, get(handlers::trip::get_trip_time))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
