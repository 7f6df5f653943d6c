//! SOAP 1.1 faults

use std::fmt;

/// Fault code, as carried in `<faultcode>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultCode {
    /// The message was malformed or carried invalid arguments
    Client,
    /// The server failed while processing a valid message
    Server,
}

impl FaultCode {
    /// Qualified name using the `soap` envelope prefix
    pub fn as_qname(&self) -> &'static str {
        match self {
            FaultCode::Client => "soap:Client",
            FaultCode::Server => "soap:Server",
        }
    }

    /// Parse a fault code regardless of its namespace prefix.
    ///
    /// Anything that is not `Client` is treated as a server-side fault.
    pub fn parse(raw: &str) -> Self {
        let local = raw.rsplit(':').next().unwrap_or(raw).trim();
        if local.eq_ignore_ascii_case("Client") || local.starts_with("Client.") {
            FaultCode::Client
        } else {
            FaultCode::Server
        }
    }
}

/// A SOAP fault returned in place of a response element
#[derive(Debug, Clone, PartialEq)]
pub struct Fault {
    pub code: FaultCode,
    pub message: String,
}

impl Fault {
    pub fn client(message: impl Into<String>) -> Self {
        Self {
            code: FaultCode::Client,
            message: message.into(),
        }
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self {
            code: FaultCode::Server,
            message: message.into(),
        }
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.as_qname(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ignores_prefix() {
        assert_eq!(FaultCode::parse("soap:Client"), FaultCode::Client);
        assert_eq!(FaultCode::parse("SOAP-ENV:Client"), FaultCode::Client);
        assert_eq!(FaultCode::parse("Client"), FaultCode::Client);
        assert_eq!(FaultCode::parse("soapenv:Client.Validation"), FaultCode::Client);
        assert_eq!(FaultCode::parse("soap:Server"), FaultCode::Server);
        assert_eq!(FaultCode::parse("whatever"), FaultCode::Server);
    }

    #[test]
    fn display() {
        assert_eq!(
            Fault::client("bad input").to_string(),
            "soap:Client: bad input"
        );
    }
}
