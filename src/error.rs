use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ControlError {
    #[error("Failed to load configuration: {0}")]
    Config(String),

    #[error("Failed to bind to address {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Client-side failures of a settings change request. Each variant carries
/// the raw offending input; the response message is only rendered at the
/// serialization boundary below.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("cannot decode request's body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("cannot decode request's body: {0}")]
    BodyRead(axum::Error),

    #[error("unknown error threshold: {0}")]
    UnknownThreshold(String),

    #[error("invalid verbosity level: {0}")]
    InvalidVerbosity(i64),
}

impl IntoResponse for SettingsError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
