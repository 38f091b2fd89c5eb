//! Handlers for GET|POST /debug/log/settings

use crate::error::SettingsError;
use crate::severity::Severity;
use crate::snapshot::Snapshot;
use crate::state::LogState;
use axum::Json;
use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use std::sync::Arc;
use tracing::{info, warn};

/// Settings bodies are tiny; anything larger is malformed input.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Single entry point for the settings route. Methods are dispatched by
/// hand so that anything other than GET or POST yields 404 with an empty
/// body, which is what existing clients of the endpoint expect.
pub async fn settings_handler(State(state): State<Arc<LogState>>, request: Request) -> Response {
    let method = request.method().clone();
    if method == Method::GET {
        show_settings(&state).into_response()
    } else if method == Method::POST {
        let body: Bytes = match to_bytes(request.into_body(), MAX_BODY_BYTES).await {
            Ok(body) => body,
            // Client disconnected or overran the limit mid-read; state untouched.
            Err(e) => return SettingsError::BodyRead(e).into_response(),
        };
        match change_settings(&state, &body) {
            Ok(()) => StatusCode::OK.into_response(),
            Err(e) => {
                warn!("Rejected settings change: {e}");
                e.into_response()
            }
        }
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

/// Snapshot the current stderr threshold and verbosity. Read-only.
fn show_settings(state: &LogState) -> Json<Snapshot> {
    Json(Snapshot::new(state.stderr_threshold(), state.verbosity()))
}

/// Validate and apply a settings change.
///
/// Validation order is fixed (decode, then threshold, then verbosity) and
/// short-circuits, so state is only touched once every field has passed.
/// The currently active module filter is re-read and re-supplied so a
/// settings change never clears a per-module override.
fn change_settings(state: &LogState, body: &[u8]) -> Result<(), SettingsError> {
    let req: Snapshot = serde_json::from_slice(body)?;

    let threshold = Severity::from_name(&req.stderr_threshold)
        .ok_or_else(|| SettingsError::UnknownThreshold(req.stderr_threshold.clone()))?;

    if req.verbosity < 0 || req.verbosity > i64::from(i32::MAX) {
        return Err(SettingsError::InvalidVerbosity(req.verbosity));
    }
    let verbosity = req.verbosity as i32;

    state.set_stderr_threshold(threshold);
    let (_, filter) = state.vstate();
    state.set_vstate(verbosity, filter);

    info!("Applied log settings: stderrthreshold={threshold} v={verbosity}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ModuleFilter;

    #[test]
    fn test_change_applies_both_fields() {
        let state = LogState::default();
        change_settings(&state, br#"{"stderrthreshold":"info","v":99}"#).unwrap();
        assert_eq!(state.stderr_threshold(), Severity::Info);
        assert_eq!(state.verbosity(), 99);
    }

    #[test]
    fn test_decode_failure_leaves_state_untouched() {
        let state = LogState::default();
        let err = change_settings(&state, br#"{"}"#).unwrap_err();
        assert!(matches!(err, SettingsError::Decode(_)));
        assert_eq!(state.stderr_threshold(), Severity::Error);
        assert_eq!(state.verbosity(), 0);
    }

    #[test]
    fn test_unknown_threshold_checked_before_verbosity() {
        let state = LogState::default();
        // Both fields invalid; the threshold error must win.
        let err = change_settings(&state, br#"{"stderrthreshold":"bogus","v":-1}"#).unwrap_err();
        assert!(matches!(err, SettingsError::UnknownThreshold(ref s) if s == "bogus"));
        assert_eq!(state.verbosity(), 0);
    }

    #[test]
    fn test_missing_threshold_rejected_with_empty_name() {
        let state = LogState::default();
        let err = change_settings(&state, br#"{"v":99}"#).unwrap_err();
        assert!(matches!(err, SettingsError::UnknownThreshold(ref s) if s.is_empty()));
        assert_eq!(state.stderr_threshold(), Severity::Error);
        assert_eq!(state.verbosity(), 0);
    }

    #[test]
    fn test_verbosity_range_boundaries() {
        let state = LogState::default();

        change_settings(&state, br#"{"stderrthreshold":"info","v":0}"#).unwrap();
        change_settings(&state, br#"{"stderrthreshold":"info","v":2147483647}"#).unwrap();
        assert_eq!(state.verbosity(), i32::MAX);

        let err =
            change_settings(&state, br#"{"stderrthreshold":"info","v":2147483648}"#).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidVerbosity(2147483648)));
        let err = change_settings(&state, br#"{"stderrthreshold":"info","v":-1}"#).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidVerbosity(-1)));

        // Rejections after the boundary writes must not roll anything back.
        assert_eq!(state.stderr_threshold(), Severity::Info);
        assert_eq!(state.verbosity(), i32::MAX);
    }

    #[test]
    fn test_change_preserves_module_filter() {
        let filter = ModuleFilter::new("codec=2,net=1");
        let state = LogState::new(Severity::Error, 0, filter.clone());
        change_settings(&state, br#"{"stderrthreshold":"warning","v":3}"#).unwrap();
        assert_eq!(state.vstate(), (3, filter));
    }
}
