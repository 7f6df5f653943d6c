//! Application state for the evtrip API

use std::sync::Arc;

use evtrip_core::{LocalCalculator, TripCalculator};

/// Address advertised in the WSDL when none is configured
pub const DEFAULT_SOAP_LOCATION: &str = "http://localhost:3000/wsdl";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Calculator answering the JSON façade
    calculator: Arc<dyn TripCalculator>,
    /// Endpoint address advertised in the WSDL
    soap_location: Arc<str>,
}

impl AppState {
    /// Create a new AppState with the given façade calculator
    pub fn new(calculator: Arc<dyn TripCalculator>) -> Self {
        Self {
            calculator,
            soap_location: Arc::from(DEFAULT_SOAP_LOCATION),
        }
    }

    /// AppState whose façade calls the estimator in-process
    pub fn local() -> Self {
        Self::new(Arc::new(LocalCalculator::new()))
    }

    /// Set the endpoint address advertised in the WSDL
    pub fn with_soap_location(mut self, location: impl AsRef<str>) -> Self {
        self.soap_location = Arc::from(location.as_ref());
        self
    }

    /// Get the façade calculator
    pub fn calculator(&self) -> &Arc<dyn TripCalculator> {
        &self.calculator
    }

    /// Get the advertised SOAP endpoint address
    pub fn soap_location(&self) -> &str {
        &self.soap_location
    }
}
