mod message;
mod notification;

pub use message::{DiscordMessage, Embed, EmbedField, EmbedFooter};
pub use notification::{
    Actor, Assignee, CommentData, IssueData, IssueRef, Label, Notification, NotificationKind, Team,
    UserRef, WorkflowState,
};
