//! JSON trip-time façade

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use evtrip_core::{TripRequest, TripResult};
use serde::Deserialize;
use tracing::{debug, error};

use crate::error::ApiError;
use crate::state::AppState;

/// Message returned when a query parameter is missing or not a number
pub const NUMBERS_REQUIRED: &str = "distance, autonomy and chargingTime must be numbers";

/// Raw query parameters, parsed by hand so that every failure maps to 400
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripTimeQuery {
    pub distance: Option<String>,
    pub autonomy: Option<String>,
    pub charging_time: Option<String>,
}

impl TripTimeQuery {
    /// Parse the three parameters into a request
    pub fn parse(&self) -> Result<TripRequest, ApiError> {
        Ok(TripRequest::new(
            parse_number(self.distance.as_deref())?,
            parse_number(self.autonomy.as_deref())?,
            parse_number(self.charging_time.as_deref())?,
        ))
    }
}

fn parse_number(raw: Option<&str>) -> Result<f64, ApiError> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .ok_or_else(|| ApiError::BadRequest(NUMBERS_REQUIRED.to_string()))
}

/// GET /api/trip-time?distance=&autonomy=&chargingTime=
/// Estimate a trip time through the configured calculator
pub async fn get_trip_time(
    State(state): State<AppState>,
    query: Result<Query<TripTimeQuery>, QueryRejection>,
) -> Result<Json<TripResult>, ApiError> {
    let Query(query) = query.map_err(|_| ApiError::BadRequest(NUMBERS_REQUIRED.to_string()))?;
    let request = query.parse()?;

    // Bad input never reaches the calculator
    request.validate()?;

    let calculator = state.calculator();
    debug!(calculator = calculator.name(), ?request, "Calculating trip time");

    let result = calculator
        .calculate_trip_time(&request)
        .await
        .map_err(|e| {
            if !e.is_invalid_argument() {
                error!(calculator = calculator.name(), error = %e, "Trip time calculation failed");
            }
            ApiError::from(e)
        })?;

    Ok(Json(result))
}
