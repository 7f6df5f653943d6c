//! Error types for SOAP decoding

use thiserror::Error;

/// Errors that can occur while decoding a SOAP message
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SoapError {
    /// Not well-formed XML
    #[error("malformed XML: {0}")]
    Xml(String),

    /// The expected operation element is not in the body
    #[error("missing element: {0}")]
    MissingElement(&'static str),

    /// A required field of the operation element is absent or empty
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// A field appears more than once in the operation element
    #[error("duplicate field: {0}")]
    DuplicateField(&'static str),

    /// A field is present but is not an xsd:double
    #[error("invalid number for {field}: '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}

/// Result type for SOAP decoding
pub type SoapResult<T> = Result<T, SoapError>;
