//! Error response DTOs.

use serde::{Deserialize, Serialize};

/// Opaque error body returned to the webhook caller.
///
/// Deliberately carries a single generic message; diagnostic detail is
/// logged server-side and never leaves the process.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    /// The uniform failure body for the webhook pipeline.
    pub fn processing_failed() -> Self {
        Self {
            error: "Failed to process webhook".to_string(),
        }
    }
}
