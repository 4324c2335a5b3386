//! Comment notification formatter.

use crate::error::{AppError, AppResult};
use crate::models::{CommentData, DiscordMessage, Embed, EmbedFooter, Notification};
use crate::services::format::display::LINEAR_BLUE;
use crate::services::format::timestamp::embed_timestamp;

/// Formats a Comment notification as a single embed.
///
/// The parent issue, the author, and the creation time are required;
/// a payload missing any of them is reported as a missing-field error
/// instead of being passed through half-rendered.
pub fn format(notification: &Notification) -> AppResult<DiscordMessage> {
    let data: CommentData = serde_json::from_value(notification.data.clone())
        .map_err(|e| AppError::format("data", format!("not a valid comment payload: {e}")))?;

    let issue = data
        .issue
        .as_ref()
        .ok_or_else(|| AppError::missing_field("comment", "issue"))?;
    let user = data
        .user
        .as_ref()
        .ok_or_else(|| AppError::missing_field("comment", "user"))?;
    let created_at = data
        .created_at
        .as_deref()
        .ok_or_else(|| AppError::missing_field("comment", "createdAt"))?;

    Ok(DiscordMessage::embed_only(Embed {
        title: format!("New comment on {}", issue.identifier),
        url: Some(format!("https://linear.app/issue/{}", issue.identifier)),
        description: None,
        color: LINEAR_BLUE,
        fields: vec![],
        footer: Some(EmbedFooter::new(format!("Comment by {}", user.name))),
        timestamp: Some(embed_timestamp(created_at)?),
    }))
}
