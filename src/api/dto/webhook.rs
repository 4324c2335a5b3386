//! Webhook endpoint DTOs.

use serde::{Deserialize, Serialize};

/// Body returned to Linear on successful relay.
#[derive(Debug, Serialize, Deserialize)]
pub struct WebhookAck {
    pub status: String,
}

impl WebhookAck {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
        }
    }
}
