//! Termination signal handling

use tokio::signal;

/// Wait for Ctrl+C or SIGTERM
pub async fn wait_for_shutdown() {
    tokio::select! {
        _ = wait_ctrl_c() => {},
        _ = wait_sigterm() => {},
    }

    tracing::info!("Shutdown signal received, stopping server");
}

async fn wait_ctrl_c() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!(%e, "Error handling Ctrl+C signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn wait_sigterm() {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
        Ok(mut handler) => {
            handler.recv().await;
        }
        Err(e) => {
            tracing::error!(%e, "Failed to install SIGTERM handler");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn wait_sigterm() {
    std::future::pending::<()>().await
}
