//! Test utilities for evtrip-client
//!
//! Provides helpers for running integration tests against evtrip servers.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;

use crate::{Result, TripClient};

/// A test server that automatically shuts down when dropped
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: TripClient,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl TestServer {
    /// Create a new test server from an axum Router
    ///
    /// # Example
    ///
    /// ```ignore
    /// use evtrip_client::testing::TestServer;
    /// use evtrip_api::{create_router, AppState};
    ///
    /// let server = TestServer::start(create_router(AppState::local())).await?;
    /// let result = server.client.trip_time(300.0, 200.0, 30.0).await?;
    /// ```
    pub async fn start(router: axum::Router) -> Result<Self> {
        Self::start_with(|_| Ok(router)).await
    }

    /// Create a test server whose router depends on its own address.
    ///
    /// The listener is bound first, so the router can be wired to call back
    /// into the server it is served by.
    pub async fn start_with<F>(make_router: F) -> Result<Self>
    where
        F: FnOnce(SocketAddr) -> Result<axum::Router>,
    {
        Self::start_with_timeout(make_router, Duration::from_secs(5), Duration::from_secs(2)).await
    }

    /// Create a new test server with custom client timeouts
    pub async fn start_with_timeout<F>(
        make_router: F,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self>
    where
        F: FnOnce(SocketAddr) -> Result<axum::Router>,
    {
        // Bind to any available port
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let router = make_router(addr)?;
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

        // Spawn the server
        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .ok();
        });

        let base_url = format!("http://{}", addr);
        let client = TripClient::with_config(&base_url, timeout, connect_timeout)?;

        Ok(Self {
            addr,
            client,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    /// Get the base URL of the test server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Get a reference to the client
    pub fn client(&self) -> &TripClient {
        &self.client
    }

    /// Shutdown the server gracefully
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        // Send shutdown signal if not already done
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        // Abort the task if still running
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// An address nothing listens on, for exercising connection failures
pub async fn unused_addr() -> Result<SocketAddr> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(addr)
}
