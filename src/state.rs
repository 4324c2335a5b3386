//! Application state for Axum web framework.
//!
//! Contains the shared resources accessible across all request handlers.
//! For this relay that is a single delivery provider built once at
//! startup; no mutable state is shared between requests.

use std::sync::Arc;

use crate::config::DiscordConfig;
use crate::services::notifications::{DiscordProvider, NotificationProvider};

/// Application state containing all shared services and resources.
///
/// Designed for Axum's State extractor; cloning is cheap since the
/// provider is behind an Arc.
#[derive(Clone)]
pub struct AppState {
    /// Delivery provider for formatted messages.
    pub notifier: Arc<dyn NotificationProvider>,
}

impl AppState {
    /// Creates state with a Discord provider for the configured
    /// destination.
    pub fn new(discord: DiscordConfig) -> Self {
        Self {
            notifier: Arc::new(DiscordProvider::new(discord)),
        }
    }
}
