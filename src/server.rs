//! Server module for managing HTTP server lifecycle
//!
//! This module handles server initialization, startup, and graceful
//! shutdown.

use crate::api::routes::create_router;
use crate::config::{Environment, settings::Settings};
use crate::services::notifications::NotificationProvider;
use crate::state::AppState;
use tokio::net::TcpListener;
use tokio::signal;

/// HTTP server manager
pub struct Server {
    settings: Settings,
}

impl Server {
    /// Create a new server with the given settings
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Start the server and run until shutdown signal
    ///
    /// This method:
    /// 1. Logs startup information
    /// 2. Creates application state and validates the delivery provider
    /// 3. Binds to the configured address
    /// 4. Starts the HTTP server with graceful shutdown
    ///
    /// # Errors
    /// - Delivery provider configuration errors
    /// - Address binding errors
    /// - Server runtime errors
    pub async fn run(self) -> anyhow::Result<()> {
        tracing::info!(
            app_name = %self.settings.application.name,
            app_version = %self.settings.application.version,
            environment = %Environment::from_env().as_str(),
            "Application starting"
        );

        tracing::info!(
            host = %self.settings.server.host,
            port = %self.settings.server.port,
            request_timeout = %self.settings.server.request_timeout,
            "Server configuration loaded"
        );

        // Log delivery configuration without the webhook URL itself;
        // the URL embeds the webhook token.
        tracing::info!(
            delivery_timeout = %self.settings.discord.timeout_seconds,
            webhook_configured = %(!self.settings.discord.webhook_url.is_empty()),
            "Discord configuration loaded"
        );

        let state = AppState::new(self.settings.discord.clone());

        // Fail startup on a bad destination rather than dropping
        // messages at delivery time.
        state.notifier.validate_config().await.map_err(|e| {
            tracing::error!(error = %e, "Delivery provider validation failed");
            anyhow::anyhow!("Delivery provider validation failed: {}", e)
        })?;
        tracing::info!(provider = %state.notifier.name(), "Delivery provider validated");

        let router = create_router(state);
        tracing::info!("Router configured");

        let address = self.settings.server.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!(error = %e, address = %address, "Failed to bind to address");
            anyhow::anyhow!("Failed to bind to {}: {}", address, e)
        })?;

        tracing::info!(address = %address, "Server listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}

/// Waits for a shutdown signal (Ctrl+C or SIGTERM).
///
/// This function returns when either signal is received, allowing
/// the server to perform graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
