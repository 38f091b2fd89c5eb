use tracing::debug;

/// Handler for GET /v1/health. Liveness only: the control plane holds no
/// connections or background work, so being able to answer is the check.
pub async fn health_handler() -> &'static str {
    debug!("Liveness probe answered");
    "OK"
}
