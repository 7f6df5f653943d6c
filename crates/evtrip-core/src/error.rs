//! Error types for trip-time calculation

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors that can occur while calculating a trip time
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Input is missing, non-finite or physically meaningless
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The remote calculation endpoint failed
    #[error("Upstream failure: {0}")]
    Upstream(String),

    /// The remote calculation endpoint did not answer in time
    #[error("Operation timed out")]
    Timeout,
}

impl CalcError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            CalcError::InvalidArgument(_) => 400,
            CalcError::Upstream(_) => 500,
            CalcError::Timeout => 500,
        }
    }

    /// Shorthand for an `InvalidArgument` error
    pub fn invalid(message: impl Into<String>) -> Self {
        CalcError::InvalidArgument(message.into())
    }

    /// Whether the caller sent bad input (as opposed to an internal failure)
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CalcError::InvalidArgument(_))
    }
}
