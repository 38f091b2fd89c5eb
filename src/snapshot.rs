//! Wire representation of the current logging settings

use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// Schema of the control API's request and response body.
///
/// Field names are fixed wire constants; both fields default when absent so
/// a partial request decodes and fails validation rather than decoding
/// (matching the behavior existing clients rely on). `verbosity` is carried
/// wider than the stored `i32` so out-of-range input reaches the range check
/// instead of failing in the decoder.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    #[serde(rename = "stderrthreshold", default)]
    pub stderr_threshold: String,
    #[serde(rename = "v", default)]
    pub verbosity: i64,
}

impl Snapshot {
    /// Build the externally visible snapshot for a severity/verbosity pair.
    /// Pure; a fresh value is constructed on every read.
    #[must_use]
    pub fn new(threshold: Severity, verbosity: i32) -> Self {
        Self {
            stderr_threshold: threshold.as_str().to_string(),
            verbosity: i64::from(verbosity),
        }
    }
}
