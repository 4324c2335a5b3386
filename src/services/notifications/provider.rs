//! Core notification provider trait and types.
//!
//! The provider abstraction is the seam between formatting and delivery:
//! handlers depend on the trait, so tests can substitute a recording
//! provider and a second destination platform would slot in beside the
//! Discord one.

use crate::error::AppResult;
use crate::models::DiscordMessage;
use async_trait::async_trait;

/// Outcome of a successful delivery attempt.
///
/// Failed deliveries are errors, not receipts; any non-success response
/// from the destination is a pipeline failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// HTTP status code returned by the destination.
    pub status_code: u16,
    /// Time taken for the outbound call in milliseconds.
    pub duration_ms: u64,
}

/// Trait for message delivery providers.
///
/// Uses `async_trait` to support async methods with dynamic dispatch.
/// All providers must be Send + Sync for use in async contexts.
#[async_trait]
pub trait NotificationProvider: Send + Sync {
    /// Delivers a formatted message to the destination.
    ///
    /// # Errors
    /// Returns `AppError::Delivery` when the destination responds with a
    /// non-success status or the call fails (connect error, timeout).
    async fn send(&self, message: &DiscordMessage) -> AppResult<DeliveryReceipt>;

    /// Provider name for logging.
    fn name(&self) -> &'static str;

    /// Validates provider configuration (optional, default no-op).
    ///
    /// Runs once at startup so misconfiguration fails the process before
    /// it starts accepting webhooks.
    async fn validate_config(&self) -> AppResult<()> {
        Ok(())
    }
}
