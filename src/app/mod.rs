mod router;
pub mod server;
mod state;
pub mod tracing;

use crate::config;
use crate::error::ControlError;
use tokio_util::sync::CancellationToken;

/// Application entry point. Initializes tracing, configuration, and starts
/// the control server.
pub async fn run() -> Result<(), ControlError> {
    // Handle healthcheck subcommand (for Docker healthcheck in distroless image)
    if std::env::args().nth(1).as_deref() == Some("healthcheck") {
        match crate::healthcheck().await {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("Healthcheck failed: {e}");
                std::process::exit(1)
            }
        }
    }

    tracing::init_tracing();

    let settings =
        config::get_configuration().map_err(|e| ControlError::Config(e.to_string()))?;
    ::tracing::info!(
        "Loaded settings: stderrthreshold={} v={}",
        settings.stderr_threshold,
        settings.verbosity
    );

    let shutdown_token = CancellationToken::new();

    let app_state = state::AppState::from_settings(&settings);
    let app = router::main_router(app_state.log_state);

    server::serve(app, settings.http_port, shutdown_token).await
}
