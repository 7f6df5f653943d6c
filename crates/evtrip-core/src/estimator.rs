//! Trip-time estimation
//!
//! The model is deliberately simple: the vehicle cruises at a fixed average
//! speed and stops for one full recharge every time it completes a
//! full-range leg.
//!
//! ```text
//! drivingTime       = distance / 100
//! numberOfRecharges = floor(distance / autonomy)
//! tripTime          = drivingTime + numberOfRecharges * chargingTime / 60
//! ```
//!
//! A trip that is an exact multiple of the autonomy still counts the
//! recharge at the very end (300 km with 100 km of autonomy is 3 recharges).

use tracing::debug;

use crate::error::{CalcError, CalcResult};
use crate::models::{TripBreakdown, TripRequest, TripResult};

/// Average cruising speed assumed for the whole trip, in km/h
pub const AVERAGE_SPEED_KMH: f64 = 100.0;

const MINUTES_PER_HOUR: f64 = 60.0;

/// Estimate the total trip time in hours.
///
/// `distance` and `autonomy` are in km, `charging_time` is the duration of
/// one full recharge in minutes.
pub fn estimate(distance: f64, autonomy: f64, charging_time: f64) -> CalcResult<TripResult> {
    TripRequest::new(distance, autonomy, charging_time).estimate()
}

/// Compute every intermediate value of the estimation
pub fn breakdown(request: &TripRequest) -> CalcResult<TripBreakdown> {
    request.validate()?;

    let driving_time = request.distance / AVERAGE_SPEED_KMH;
    let recharges = (request.distance / request.autonomy).floor();
    let charging_time_hours = request.charging_time / MINUTES_PER_HOUR;
    // Instant recharges add nothing, however many there are.
    let trip_time = if charging_time_hours == 0.0 {
        driving_time
    } else {
        driving_time + recharges * charging_time_hours
    };

    // Finite inputs can still overflow (huge distance over a tiny autonomy).
    if !trip_time.is_finite() {
        return Err(CalcError::invalid(
            "inputs produce a trip time that is not a finite number",
        ));
    }

    let breakdown = TripBreakdown {
        driving_time,
        number_of_recharges: recharges,
        charging_time_hours,
        trip_time,
    };

    debug!(
        distance = request.distance,
        autonomy = request.autonomy,
        charging_time = request.charging_time,
        recharges = breakdown.number_of_recharges,
        trip_time,
        "Estimated trip time"
    );

    Ok(breakdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn scenario_one_recharge() {
        let b = breakdown(&TripRequest::new(300.0, 200.0, 30.0)).unwrap();
        assert_eq!(b.driving_time, 3.0);
        assert_eq!(b.number_of_recharges, 1.0);
        assert_eq!(b.charging_time_hours, 0.5);
        assert_eq!(b.trip_time, 3.5);
    }

    #[test]
    fn zero_distance_takes_no_time() {
        assert_eq!(estimate(0.0, 200.0, 30.0).unwrap().trip_time, 0.0);
    }

    #[rstest]
    #[case(300.0, 100.0, 3.0)]
    #[case(299.999, 100.0, 2.0)]
    #[case(100.0, 100.0, 1.0)]
    #[case(99.0, 100.0, 0.0)]
    #[case(0.0, 100.0, 0.0)]
    #[case(1.0e30, 1.0, 1.0e30)]
    fn recharges_use_floor(#[case] distance: f64, #[case] autonomy: f64, #[case] expected: f64) {
        let b = breakdown(&TripRequest::new(distance, autonomy, 30.0)).unwrap();
        assert_eq!(b.number_of_recharges, expected);
    }

    #[rstest]
    #[case(250.0, 50.0)]
    #[case(1000.0, 120.0)]
    #[case(42.0, 400.0)]
    #[case(1.0e300, 1.0e-10)]
    fn zero_charging_time_is_driving_time_only(#[case] distance: f64, #[case] autonomy: f64) {
        let result = estimate(distance, autonomy, 0.0).unwrap();
        assert_eq!(result.trip_time, distance / 100.0);
    }

    #[test]
    fn same_inputs_same_result() {
        let first = estimate(523.7, 310.2, 45.0).unwrap();
        let second = estimate(523.7, 310.2, 45.0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn longer_trips_never_take_less_time() {
        let mut previous = 0.0;
        let mut distance = 0.0;
        while distance <= 2000.0 {
            let trip_time = estimate(distance, 180.0, 40.0).unwrap().trip_time;
            assert!(
                trip_time >= previous,
                "trip time decreased at {} km: {} < {}",
                distance,
                trip_time,
                previous
            );
            previous = trip_time;
            distance += 7.5;
        }
    }

    #[test]
    fn trip_time_is_at_least_driving_time() {
        for distance in [0.0, 12.5, 400.0, 1234.0] {
            let b = breakdown(&TripRequest::new(distance, 150.0, 25.0)).unwrap();
            assert!(b.trip_time >= b.driving_time);
        }
    }

    #[test]
    fn zero_autonomy_is_invalid() {
        let err = estimate(100.0, 0.0, 30.0).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn overflowing_inputs_are_invalid() {
        let err = estimate(1.0e308, 1.0e-300, 30.0).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn recharge_count_beyond_integer_range_is_kept() {
        let b = breakdown(&TripRequest::new(1.0e30, 1.0, 0.0)).unwrap();
        assert_eq!(b.number_of_recharges, 1.0e30);
        assert_eq!(b.trip_time, 1.0e30 / AVERAGE_SPEED_KMH);
    }
}
