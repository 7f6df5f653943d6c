//! Shared fixtures for evtrip end-to-end tests

use std::sync::Arc;
use std::time::Duration;

use evtrip_api::{create_router, AppState};
use evtrip_client::testing::TestServer;
use evtrip_client::Result;
use evtrip_proxy::SoapCalculator;

/// Start a server whose JSON façade calls its own SOAP endpoint
pub async fn start_self_hosted(timeout: Duration) -> Result<TestServer> {
    TestServer::start_with(|addr| {
        let base_url = format!("http://{}", addr);
        let calculator = SoapCalculator::with_timeout(&base_url, timeout)?;
        let state = AppState::new(Arc::new(calculator))
            .with_soap_location(format!("{}/wsdl", base_url));
        Ok(create_router(state))
    })
    .await
}

/// Start a server whose JSON façade calls the SOAP endpoint at `upstream`
pub async fn start_with_upstream(upstream: &str, timeout: Duration) -> Result<TestServer> {
    let calculator = SoapCalculator::with_timeout(upstream, timeout)?;
    TestServer::start(create_router(AppState::new(Arc::new(calculator)))).await
}

/// Fetch `path` on `server` and return the status and JSON body
pub async fn get_json(server: &TestServer, path: &str) -> (u16, serde_json::Value) {
    let response = reqwest::get(format!("{}{}", server.base_url(), path))
        .await
        .expect("request");
    let status = response.status().as_u16();
    let body = response.json().await.expect("JSON body");
    (status, body)
}
