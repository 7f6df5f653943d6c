//! TOML configuration for evtripd
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 3000
//! # public_url = "http://trip.example.com/wsdl"
//!
//! [facade]
//! mode = "soap"      # or "local"
//! timeout_ms = 5000
//! ```

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

/// How the JSON façade reaches the estimator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FacadeMode {
    /// Call the estimator in-process
    Local,
    /// Call the process's own SOAP endpoint
    Soap,
}

/// Listener settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// SOAP endpoint address advertised in the WSDL
    pub public_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            public_url: None,
        }
    }
}

impl ServerConfig {
    /// Address advertised in the WSDL for a server bound to `port`
    pub fn soap_location(&self, port: u16) -> String {
        self.public_url
            .clone()
            .unwrap_or_else(|| format!("http://localhost:{}/wsdl", port))
    }
}

/// JSON façade settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FacadeConfig {
    pub mode: FacadeMode,
    /// Bound on one SOAP round trip
    pub timeout_ms: u64,
}

impl Default for FacadeConfig {
    fn default() -> Self {
        Self {
            mode: FacadeMode::Soap,
            timeout_ms: 5000,
        }
    }
}

impl FacadeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Top-level daemon configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DaemonConfig {
    pub server: ServerConfig,
    pub facade: FacadeConfig,
}

impl DaemonConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of file values
    pub fn apply_overrides(&mut self, port: Option<u16>, mode: Option<FacadeMode>) {
        if let Some(port) = port {
            self.server.port = port;
        }
        if let Some(mode) = mode {
            self.facade.mode = mode;
        }
    }

    fn validate(&self) -> Result<()> {
        if self.facade.timeout_ms == 0 {
            anyhow::bail!("facade.timeout_ms must be greater than 0");
        }
        Ok(())
    }
}

/// Base URL the façade uses to reach this process's own SOAP endpoint
pub fn self_url(local_addr: SocketAddr) -> String {
    let ip = match local_addr.ip() {
        IpAddr::V4(ip) if ip.is_unspecified() => IpAddr::V4(Ipv4Addr::LOCALHOST),
        IpAddr::V6(ip) if ip.is_unspecified() => IpAddr::V6(Ipv6Addr::LOCALHOST),
        ip => ip,
    };
    format!("http://{}", SocketAddr::new(ip, local_addr.port()))
}
