//! evtripd - trip-time service daemon
//!
//! Serves the SOAP `calculateTripTime` endpoint (`/wsdl`) and the JSON
//! façade (`/api/trip-time`) on one port. In `soap` mode the façade answers
//! by calling the SOAP endpoint of this same process.
//!
//! Usage:
//!   evtripd [OPTIONS] [config.toml]

mod config;
mod shutdown;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use evtrip_api::{create_router, AppState};
use evtrip_core::{LocalCalculator, TripCalculator};
use evtrip_proxy::SoapCalculator;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{self_url, DaemonConfig, FacadeMode};

#[derive(Parser)]
#[command(name = "evtripd")]
#[command(author, version, about = "Trip-time estimation service (SOAP + JSON)")]
struct Args {
    /// Server config file (TOML)
    config: Option<PathBuf>,

    /// Listening port
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// How the JSON façade reaches the estimator
    #[arg(short, long, value_enum)]
    mode: Option<FacadeMode>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn init_logging(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "evtripd=info,evtrip_api=info,evtrip_proxy=info,tower_http=info".into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_json);

    tracing::info!("Starting evtripd (trip-time service)");

    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("Loading config from: {}", path.display());
            DaemonConfig::load(path)?
        }
        None => DaemonConfig::default(),
    };
    config.apply_overrides(args.port, args.mode);

    let listener = TcpListener::bind((config.server.host.as_str(), config.server.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.server.host, config.server.port))?;
    let local_addr = listener.local_addr()?;

    let state = build_state(&config, local_addr)?;
    let app = create_router(state.clone());

    tracing::info!("Listening on http://{}", local_addr);
    tracing::info!("SOAP service at {}?wsdl", state.soap_location());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::wait_for_shutdown())
        .await?;

    tracing::info!("evtripd stopped");
    Ok(())
}

/// Wire the façade calculator and WSDL location for a server bound to `local_addr`
fn build_state(
    config: &DaemonConfig,
    local_addr: std::net::SocketAddr,
) -> anyhow::Result<AppState> {
    let calculator: Arc<dyn TripCalculator> = match config.facade.mode {
        FacadeMode::Local => Arc::new(LocalCalculator::new()),
        FacadeMode::Soap => {
            let base_url = self_url(local_addr);
            Arc::new(SoapCalculator::with_timeout(&base_url, config.facade.timeout())?)
        }
    };

    tracing::info!(
        calculator = calculator.name(),
        timeout_ms = config.facade.timeout_ms,
        "JSON façade calculator"
    );

    Ok(AppState::new(calculator)
        .with_soap_location(config.server.soap_location(local_addr.port())))
}
