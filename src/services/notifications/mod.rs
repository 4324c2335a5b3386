//! Message delivery with pluggable providers.
//!
//! The core trait `NotificationProvider` abstracts over destination
//! platforms; Discord incoming webhooks are the one implementation this
//! service ships.

mod discord_provider;
mod provider;

pub use discord_provider::DiscordProvider;
pub use provider::{DeliveryReceipt, NotificationProvider};
