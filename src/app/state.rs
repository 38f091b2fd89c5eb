use crate::config::Settings;
use crate::state::LogState;
use std::sync::Arc;

/// Shared application state holding the process-wide logging settings.
///
/// Both the control handler and the logging hot path receive this state by
/// reference; there is no hidden global.
pub struct AppState {
    pub log_state: Arc<LogState>,
}

impl AppState {
    /// Create `AppState` from configuration settings.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        let log_state = Arc::new(LogState::new(
            settings.stderr_threshold,
            settings.verbosity,
            settings.vmodule.clone(),
        ));
        Self { log_state }
    }
}
