//! Data Transfer Objects for API responses.
//!
//! DTOs are organized by endpoint:
//! - `webhook` - Webhook acknowledgement body
//! - `health` - Health check body
//! - `error` - Opaque error body

mod error;
mod health;
mod webhook;

pub use error::ErrorResponse;
pub use health::HealthResponse;
pub use webhook::WebhookAck;
