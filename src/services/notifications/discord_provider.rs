//! Discord webhook delivery provider.
//!
//! Serializes the formatted message as JSON and posts it to the
//! configured Discord incoming-webhook URL using the shared HTTP client.

use super::provider::{DeliveryReceipt, NotificationProvider};
use crate::config::DiscordConfig;
use crate::error::{AppError, AppResult};
use crate::external::client::HTTP_CLIENT;
use async_trait::async_trait;
use reqwest::Url;
use std::time::{Duration, Instant};

/// Delivers messages to a single Discord incoming-webhook endpoint.
pub struct DiscordProvider {
    config: DiscordConfig,
}

impl DiscordProvider {
    /// Creates a provider from the loaded Discord configuration.
    pub fn new(config: DiscordConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl NotificationProvider for DiscordProvider {
    /// Posts the message to the webhook URL with the configured timeout.
    ///
    /// Any non-2xx response is a delivery failure; the response body is
    /// captured into the error for diagnostics but never surfaced to the
    /// webhook caller.
    async fn send(&self, message: &crate::models::DiscordMessage) -> AppResult<DeliveryReceipt> {
        let start = Instant::now();

        let response = HTTP_CLIENT
            .post(&self.config.webhook_url)
            .timeout(Duration::from_secs(self.config.timeout_seconds))
            .json(message)
            .send()
            .await
            .map_err(|e| {
                let status = if e.is_timeout() {
                    "timed out".to_string()
                } else {
                    "request failed".to_string()
                };
                AppError::Delivery {
                    status,
                    detail: Some(e.to_string()),
                }
            })?;

        let duration_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.ok();
            tracing::error!(
                status = %status,
                body = body.as_deref().unwrap_or("<unreadable>"),
                "Discord webhook rejected the message"
            );
            return Err(AppError::Delivery {
                status: status.to_string(),
                detail: body,
            });
        }

        tracing::debug!(
            status = %status,
            duration_ms = %duration_ms,
            "Message delivered to Discord"
        );

        Ok(DeliveryReceipt {
            status_code: status.as_u16(),
            duration_ms,
        })
    }

    fn name(&self) -> &'static str {
        "discord"
    }

    /// Requires a parseable http(s) webhook URL.
    async fn validate_config(&self) -> AppResult<()> {
        let url = Url::parse(&self.config.webhook_url).map_err(|e| AppError::Configuration {
            key: "discord.webhook_url".to_string(),
            source: anyhow::anyhow!("invalid URL: {e}"),
        })?;

        if url.scheme() != "https" && url.scheme() != "http" {
            return Err(AppError::Configuration {
                key: "discord.webhook_url".to_string(),
                source: anyhow::anyhow!("unsupported scheme '{}'", url.scheme()),
            });
        }

        Ok(())
    }
}
