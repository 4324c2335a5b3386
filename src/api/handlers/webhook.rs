//! Webhook endpoint handler.
//!
//! The full relay pipeline runs here: deserialize the Linear
//! notification, format it into a Discord message, deliver it. Any
//! failure along the way is logged with detail and answered with the
//! uniform opaque 500.

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::api::dto::WebhookAck;
use crate::error::{AppError, AppResult};
use crate::models::Notification;
use crate::services::format::format_notification;
use crate::state::AppState;

/// Handles `POST /` from Linear.
///
/// A body that fails to deserialize is a processing failure like any
/// other (opaque 500), not a 400; Linear gets no detail about what this
/// endpoint expects.
pub async fn receive_webhook(
    State(state): State<AppState>,
    payload: Result<Json<Notification>, JsonRejection>,
) -> AppResult<Json<WebhookAck>> {
    let Json(notification) = payload
        .map_err(|e| AppError::format("body", format!("invalid notification payload: {e}")))?;

    tracing::info!(
        kind = %notification.kind,
        action = %notification.action,
        actor = %notification.actor_name(),
        "Received webhook from Linear"
    );

    let message = format_notification(&notification)?;
    let receipt = state.notifier.send(&message).await?;

    tracing::info!(
        provider = %state.notifier.name(),
        status = %receipt.status_code,
        duration_ms = %receipt.duration_ms,
        "Webhook relayed"
    );

    Ok(Json(WebhookAck::success()))
}
