use crate::handler::health::health_handler;
use crate::handler::settings::settings_handler;
use crate::state::LogState;
use axum::Router;
use axum::routing::{any, get};
use std::sync::Arc;

/// Build the HTTP router (health + log settings control).
///
/// The settings route is registered with `any` because the handler owns
/// method dispatch, including the 404 for unsupported methods.
pub fn main_router(log_state: Arc<LogState>) -> Router {
    let v1_health_router = Router::new().route("/v1/health", get(health_handler));

    let settings_router = Router::new()
        .route("/debug/log/settings", any(settings_handler))
        .with_state(log_state);

    Router::new()
        .merge(v1_health_router)
        .merge(settings_router)
}
