use crate::error::ControlError;
use axum::Router;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Start the HTTP server with graceful shutdown.
///
/// The `shutdown_token` is cancelled once a termination signal arrives so
/// any other task holding a child token can drain as well.
pub async fn serve(
    app: Router,
    http_port: u16,
    shutdown_token: CancellationToken,
) -> Result<(), ControlError> {
    let bind_addr = format!("0.0.0.0:{http_port}");
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| ControlError::Bind {
            address: bind_addr.clone(),
            source: e,
        })?;
    info!("Server listening on {}", listener.local_addr()?);
    info!("  - GET  /v1/health           (health check)");
    info!("  - GET  /debug/log/settings  (current log settings)");
    info!("  - POST /debug/log/settings  (change log settings)");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            shutdown_token.cancel();
        })
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for SIGTERM or SIGINT (Ctrl+C) for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received SIGINT, initiating graceful shutdown"),
        () = terminate => info!("Received SIGTERM, initiating graceful shutdown"),
    }
}
