//! Request and result types exchanged by every evtrip surface

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};

/// Input of one trip-time estimation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    /// Total trip distance in km
    pub distance: f64,
    /// Range of the vehicle on one full charge, in km
    pub autonomy: f64,
    /// Duration of one full recharge, in minutes
    pub charging_time: f64,
}

/// Output of one trip-time estimation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripResult {
    /// Estimated total duration in hours
    pub trip_time: f64,
}

/// Intermediate values of an estimation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripBreakdown {
    /// Hours spent driving at the average cruising speed
    pub driving_time: f64,
    /// Full-range legs completed before arrival (a whole number, possibly
    /// beyond the range of any integer type)
    pub number_of_recharges: f64,
    /// Duration of one recharge, in hours
    pub charging_time_hours: f64,
    /// Driving time plus all recharges, in hours
    pub trip_time: f64,
}

impl TripRequest {
    pub fn new(distance: f64, autonomy: f64, charging_time: f64) -> Self {
        Self {
            distance,
            autonomy,
            charging_time,
        }
    }

    /// Check that the request describes a physically meaningful trip.
    ///
    /// All inputs must be finite, `autonomy` strictly positive, and
    /// `distance` / `charging_time` non-negative.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_finite("distance", self.distance)?;
        ensure_finite("autonomy", self.autonomy)?;
        ensure_finite("chargingTime", self.charging_time)?;

        if self.autonomy <= 0.0 {
            return Err(CalcError::invalid("autonomy must be greater than 0"));
        }
        if self.distance < 0.0 {
            return Err(CalcError::invalid("distance must not be negative"));
        }
        if self.charging_time < 0.0 {
            return Err(CalcError::invalid("chargingTime must not be negative"));
        }
        Ok(())
    }

    /// Estimate the trip time for this request
    pub fn estimate(&self) -> CalcResult<TripResult> {
        crate::estimator::breakdown(self).map(TripResult::from)
    }
}

fn ensure_finite(field: &str, value: f64) -> CalcResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::invalid(format!("{} must be a finite number", field)))
    }
}

impl From<TripBreakdown> for TripResult {
    fn from(breakdown: TripBreakdown) -> Self {
        Self {
            trip_time: breakdown.trip_time,
        }
    }
}
