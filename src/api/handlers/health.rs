//! Health check endpoint handler.
//!
//! The relay holds no connections and no state, so health is simply
//! "the process is serving requests". No dependency on the formatting
//! or delivery logic.

use axum::response::Json;

use crate::api::dto::HealthResponse;

/// Handles `GET /health`.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
