//! Error handler for converting AppError to HTTP responses.
//!
//! The webhook caller always receives the same opaque 500 body on any
//! pipeline failure; the structured detail of each variant goes to the
//! log only. This keeps delivery diagnostics (Discord response bodies,
//! malformed field names) out of responses to an unauthenticated
//! endpoint.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Format { field, reason } => {
                tracing::error!(field = %field, reason = %reason, "Malformed notification field");
            }
            AppError::MissingField { entity, field } => {
                tracing::error!(entity = %entity, field = %field, "Notification missing required field");
            }
            AppError::Delivery { status, detail } => {
                tracing::error!(
                    status = %status,
                    detail = detail.as_deref().unwrap_or(""),
                    "Outbound delivery failed"
                );
            }
            AppError::Configuration { key, source } => {
                tracing::error!(key = %key, error = %source, "Configuration error");
            }
            AppError::Internal { source } => {
                tracing::error!(error = %source, "Internal error");
            }
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::processing_failed()),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_format_error_is_opaque_500() {
        let response = AppError::format("updatedAt", "invalid date").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_of(response).await;
        assert_eq!(body["error"], "Failed to process webhook");
        assert!(body.get("field").is_none());
    }

    #[tokio::test]
    async fn test_delivery_error_does_not_leak_detail() {
        let response = AppError::Delivery {
            status: "401 Unauthorized".to_string(),
            detail: Some("Invalid Webhook Token".to_string()),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_of(response).await;
        assert_eq!(body["error"], "Failed to process webhook");
        assert!(!body.to_string().contains("Invalid Webhook Token"));
    }

    #[tokio::test]
    async fn test_missing_field_error_is_opaque_500() {
        let response = AppError::missing_field("comment", "issue").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_of(response).await;
        assert_eq!(body["error"], "Failed to process webhook");
    }
}
