//! Inbound Linear webhook payload types.
//!
//! Linear sends one JSON object per change event. The shape of `data`
//! depends on the declared `type`, so it is kept as a raw value here and
//! parsed into [`IssueData`] or [`CommentData`] by the matching formatter.

use serde::{Deserialize, Serialize};

/// A single Linear webhook notification.
///
/// Immutable for the duration of one request; never persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct Notification {
    /// Raw entity type as sent by Linear ("Issue", "Comment", ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-form action verb ("create", "update", "remove", ...).
    #[serde(default)]
    pub action: String,
    /// The user that triggered the event.
    #[serde(default)]
    pub actor: Option<Actor>,
    /// Type-specific payload, parsed per [`NotificationKind`].
    #[serde(default)]
    pub data: serde_json::Value,
}

impl Notification {
    /// Display name of the triggering user, or "Unknown" when absent.
    pub fn actor_name(&self) -> &str {
        self.actor.as_ref().map(|a| a.name.as_str()).unwrap_or("Unknown")
    }
}

/// The set of notification kinds this service formats specially.
///
/// A total mapping: every type string resolves to exactly one variant,
/// with `Other` covering everything without a dedicated formatter. New
/// kinds get a variant and a formatter here, never string checks at the
/// call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Issue,
    Comment,
    Other,
}

impl NotificationKind {
    /// Resolve a raw Linear type string. Exact match, never fails.
    pub fn parse(kind: &str) -> Self {
        match kind {
            "Issue" => NotificationKind::Issue,
            "Comment" => NotificationKind::Comment,
            _ => NotificationKind::Other,
        }
    }
}

/// The user that triggered a notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub name: String,
}

/// Issue payload carried when `type` is "Issue".
///
/// Timestamps stay raw ISO-8601 strings here; the formatter parses them
/// so a malformed date surfaces as a format error instead of a rejected
/// request body.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueData {
    #[serde(default)]
    pub team: Option<Team>,
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub state: Option<WorkflowState>,
    #[serde(default)]
    pub priority: Option<u8>,
    #[serde(default)]
    pub assignee: Option<Assignee>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>,
}

impl IssueData {
    /// Display identifier in Linear's "{team key}-{number}" form.
    ///
    /// The team key defaults to "UNKNOWN" on the rare payload without a
    /// team, keeping the identifier well-formed.
    pub fn identifier(&self) -> String {
        let key = self.team.as_ref().map(|t| t.key.as_str()).unwrap_or("UNKNOWN");
        format!("{}-{}", key, self.number)
    }

    /// Canonical URL of the issue on linear.app.
    pub fn canonical_url(&self) -> String {
        format!("https://linear.app/issue/{}", self.identifier())
    }

    /// Workflow state display name, if the payload carries one.
    pub fn state_name(&self) -> Option<&str> {
        self.state.as_ref().map(|s| s.name.as_str())
    }
}

/// The team an issue belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct Team {
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Workflow state of an issue ("Todo", "In Progress", "Done", ...).
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowState {
    pub name: String,
}

/// Assigned user of an issue.
#[derive(Debug, Clone, Deserialize)]
pub struct Assignee {
    pub name: String,
}

/// A label attached to an issue.
#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    pub name: String,
}

/// Comment payload carried when `type` is "Comment".
///
/// Linear nests the parent issue and the author; both are optional at the
/// wire level so their absence can be reported as a missing-field error
/// rather than a panic.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentData {
    #[serde(default)]
    pub issue: Option<IssueRef>,
    #[serde(default)]
    pub user: Option<UserRef>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

/// Reference to the issue a comment belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueRef {
    pub identifier: String,
}

/// Reference to the comment author.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRef {
    pub name: String,
}
