//! Notification formatting: the Linear payload → Discord message core.
//!
//! One pure formatter per notification kind, selected by the dispatcher
//! in this module. Adding support for a new Linear entity means adding a
//! `NotificationKind` variant and a formatter module; nothing else
//! branches on type strings.

mod comment;
pub mod display;
mod fallback;
mod issue;
pub mod timestamp;

use crate::error::AppResult;
use crate::models::{DiscordMessage, Notification, NotificationKind};

/// Routes a notification to its formatter and returns the produced
/// Discord message.
///
/// Unrecognized kinds are not errors; they take the fallback path and
/// are logged at info level.
pub fn format_notification(notification: &Notification) -> AppResult<DiscordMessage> {
    match NotificationKind::parse(&notification.kind) {
        NotificationKind::Issue => issue::format(notification),
        NotificationKind::Comment => comment::format(notification),
        NotificationKind::Other => {
            tracing::info!(
                kind = %notification.kind,
                action = %notification.action,
                "No dedicated formatter for notification kind, using fallback"
            );
            Ok(fallback::format(notification))
        }
    }
}
