//! TripCalculator trait - the seam between the JSON façade and the estimator

use async_trait::async_trait;

use crate::error::CalcResult;
use crate::models::{TripRequest, TripResult};

/// Something that can answer a trip-time request.
///
/// The HTTP façade only talks to this trait, so the estimation can run
/// in-process ([`LocalCalculator`]) or behind a SOAP round trip.
#[async_trait]
pub trait TripCalculator: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    /// Calculate the trip time for a request
    async fn calculate_trip_time(&self, request: &TripRequest) -> CalcResult<TripResult>;
}

/// Calculator that runs the estimator directly
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalCalculator;

impl LocalCalculator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TripCalculator for LocalCalculator {
    fn name(&self) -> &str {
        "local"
    }

    async fn calculate_trip_time(&self, request: &TripRequest) -> CalcResult<TripResult> {
        request.estimate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn local_calculator_matches_estimator() {
        let calculator: Arc<dyn TripCalculator> = Arc::new(LocalCalculator::new());
        let request = TripRequest::new(300.0, 200.0, 30.0);

        let result = calculator.calculate_trip_time(&request).await.unwrap();
        assert_eq!(result.trip_time, 3.5);
        assert_eq!(calculator.name(), "local");
    }

    #[tokio::test]
    async fn local_calculator_rejects_invalid_input() {
        let err = LocalCalculator
            .calculate_trip_time(&TripRequest::new(10.0, 0.0, 5.0))
            .await
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
