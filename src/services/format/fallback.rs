//! Fallback formatter for notification kinds without a dedicated one.

use crate::models::{DiscordMessage, Embed, Notification};
use crate::services::format::display::LINEAR_BLUE;

/// Formats any unrecognized notification as a generic update embed.
///
/// The description suffixes "ed" onto the raw action verb ("A Project
/// was createed"). Best effort only; it is not grammatically validated
/// and exists so unknown kinds still produce a visible message.
pub fn format(notification: &Notification) -> DiscordMessage {
    DiscordMessage::embed_only(Embed {
        title: format!("Linear Update: {}", notification.kind),
        url: None,
        description: Some(format!(
            "A {} was {}ed",
            notification.kind, notification.action
        )),
        color: LINEAR_BLUE,
        fields: vec![],
        footer: None,
        timestamp: None,
    })
}
