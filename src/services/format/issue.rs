//! Issue notification formatter.

use crate::error::{AppError, AppResult};
use crate::models::{DiscordMessage, Embed, EmbedField, EmbedFooter, IssueData, Notification};
use crate::services::format::display::{priority_emoji, status_color};
use crate::services::format::timestamp::{embed_timestamp, relative_timestamp};

/// Emoji and description template for an issue action.
struct ActionFormat {
    emoji: &'static str,
    description: String,
}

fn action_format(action: &str, rel_ts: &str) -> ActionFormat {
    match action {
        "create" => ActionFormat {
            emoji: "🆕",
            description: format!("New issue created {rel_ts}"),
        },
        "update" => ActionFormat {
            emoji: "📝",
            description: format!("Issue updated {rel_ts}"),
        },
        "remove" => ActionFormat {
            emoji: "🗑️",
            description: format!("Issue deleted {rel_ts}"),
        },
        other => ActionFormat {
            emoji: "ℹ️",
            description: format!("Issue {other} {rel_ts}"),
        },
    }
}

/// Formats an Issue notification as a content line plus one embed.
///
/// Defaulting policy for optional fields: team key "UNKNOWN", team name
/// "Unknown" / "Unknown Team", status "No status", assignee "Unassigned",
/// missing payload `url` falls back to the canonical issue URL. The
/// checkmark prefix appears only when the status name is exactly "Done".
pub fn format(notification: &Notification) -> AppResult<DiscordMessage> {
    let data: IssueData = serde_json::from_value(notification.data.clone())
        .map_err(|e| AppError::format("data", format!("not a valid issue payload: {e}")))?;

    let identifier = data.identifier();
    let canonical_url = data.canonical_url();

    // updatedAt wins over createdAt; an issue payload without either
    // cannot be timestamped at all.
    let event_time = data
        .updated_at
        .as_deref()
        .or(data.created_at.as_deref())
        .ok_or_else(|| AppError::missing_field("issue", "updatedAt/createdAt"))?;
    let rel_ts = relative_timestamp(event_time)?;

    let action = action_format(&notification.action, &rel_ts);

    let status = data.state_name().unwrap_or("No status");
    let team_name = data
        .team
        .as_ref()
        .and_then(|t| t.name.as_deref())
        .unwrap_or("Unknown");
    let content_url = data.url.as_deref().unwrap_or(&canonical_url);
    let checkmark = if data.state_name() == Some("Done") { "✅ " } else { "" };
    let content = format!(
        "{checkmark}**{actor}** changed issue status to **{status}** in [{team_name} Team]({content_url})",
        actor = notification.actor_name(),
    );

    let priority_value = match data.priority {
        Some(n) if n > 0 => format!("{} P{}", priority_emoji(data.priority), n),
        _ => format!("{} None", priority_emoji(data.priority)),
    };
    let assignee = data.assignee.as_ref().map(|a| a.name.as_str()).unwrap_or("Unassigned");

    let mut fields = vec![
        EmbedField::inline("Status", status),
        EmbedField::inline("Priority", priority_value),
        EmbedField::inline("Assignee", assignee),
    ];
    if !data.labels.is_empty() {
        let value = data
            .labels
            .iter()
            .map(|label| format!("`{}`", label.name))
            .collect::<Vec<_>>()
            .join(", ");
        fields.push(EmbedField::block("Labels", value));
    }

    let footer_team = data
        .team
        .as_ref()
        .and_then(|t| t.name.as_deref())
        .unwrap_or("Unknown Team");
    let footer = EmbedFooter::new(format!(
        "{footer_team} • {}",
        capitalize(&notification.action)
    ));

    Ok(DiscordMessage {
        content: Some(content),
        embeds: vec![Embed {
            title: format!("{} {identifier}: {}", action.emoji, data.title),
            url: Some(canonical_url),
            description: Some(action.description),
            color: status_color(data.state_name()),
            fields,
            footer: Some(footer),
            timestamp: Some(embed_timestamp(event_time)?),
        }],
    })
}

/// Uppercases the first character ("create" -> "Create").
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue_notification(data: serde_json::Value) -> Notification {
        serde_json::from_value(serde_json::json!({
            "type": "Issue",
            "action": "create",
            "actor": { "name": "Alice" },
            "data": data,
        }))
        .unwrap()
    }

    fn sample_data() -> serde_json::Value {
        serde_json::json!({
            "team": { "key": "ENG", "name": "Engineering" },
            "number": 42,
            "title": "Fix bug",
            "state": { "name": "Done" },
            "priority": 4,
            "assignee": null,
            "labels": [],
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        })
    }

    #[test]
    fn test_create_done_issue() {
        let message = format(&issue_notification(sample_data())).unwrap();

        let content = message.content.as_deref().unwrap();
        assert!(content.starts_with("✅ "));
        assert!(content.contains("**Alice**"));
        assert!(content.contains("**Done**"));
        assert!(content.contains("[Engineering Team]"));

        let embed = &message.embeds[0];
        assert!(embed.title.starts_with("🆕 ENG-42: Fix bug"));
        assert_eq!(embed.url.as_deref(), Some("https://linear.app/issue/ENG-42"));
        assert_eq!(embed.color, 0x77B255);
        assert_eq!(
            embed.description.as_deref(),
            Some("New issue created <t:1704067200:R>")
        );

        assert_eq!(embed.fields.len(), 3, "no Labels field when labels are empty");
        assert_eq!(embed.fields[0].value, "Done");
        assert!(embed.fields[1].value.contains("P4"));
        assert_eq!(embed.fields[2].value, "Unassigned");

        assert_eq!(embed.footer.as_ref().unwrap().text, "Engineering • Create");
        assert_eq!(embed.timestamp.as_deref(), Some("2024-01-01T00:00:00Z"));
    }

    #[test]
    fn test_no_checkmark_unless_done_exactly() {
        let mut data = sample_data();
        data["state"]["name"] = "done".into();
        let message = format(&issue_notification(data)).unwrap();
        assert!(!message.content.unwrap().starts_with("✅"));
    }

    #[test]
    fn test_labels_field_appended() {
        let mut data = sample_data();
        data["labels"] = serde_json::json!([{ "name": "bug" }, { "name": "p0" }]);
        let message = format(&issue_notification(data)).unwrap();

        let embed = &message.embeds[0];
        assert_eq!(embed.fields.len(), 4);
        let labels = &embed.fields[3];
        assert_eq!(labels.name, "Labels");
        assert_eq!(labels.value, "`bug`, `p0`");
        assert!(!labels.inline);
    }

    #[test]
    fn test_zero_priority_renders_none() {
        let mut data = sample_data();
        data["priority"] = 0.into();
        let message = format(&issue_notification(data)).unwrap();
        assert_eq!(message.embeds[0].fields[1].value, "🔘 None");
    }

    #[test]
    fn test_unrecognized_action_uses_generic_format() {
        let mut notification = issue_notification(sample_data());
        notification.action = "archive".to_string();
        let message = format(&notification).unwrap();

        let embed = &message.embeds[0];
        assert!(embed.title.starts_with("ℹ️ "));
        assert_eq!(
            embed.description.as_deref(),
            Some("Issue archive <t:1704067200:R>")
        );
        assert_eq!(embed.footer.as_ref().unwrap().text, "Engineering • Archive");
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let data = serde_json::json!({
            "number": 7,
            "title": "Orphan issue",
            "createdAt": "2024-01-01T00:00:00Z"
        });
        let mut notification = issue_notification(data);
        notification.actor = None;
        let message = format(&notification).unwrap();

        let content = message.content.as_deref().unwrap();
        assert!(content.contains("**Unknown**"));
        assert!(content.contains("**No status**"));
        assert!(content.contains("[Unknown Team]"));
        assert!(content.contains("(https://linear.app/issue/UNKNOWN-7)"));

        let embed = &message.embeds[0];
        assert_eq!(embed.color, crate::services::format::display::LINEAR_BLUE);
        assert_eq!(embed.fields[0].value, "No status");
        assert_eq!(embed.footer.as_ref().unwrap().text, "Unknown Team • Create");
    }

    #[test]
    fn test_updated_at_wins_over_created_at() {
        let mut data = sample_data();
        data["updatedAt"] = "2024-06-01T12:00:00Z".into();
        let message = format(&issue_notification(data)).unwrap();
        assert_eq!(
            message.embeds[0].timestamp.as_deref(),
            Some("2024-06-01T12:00:00Z")
        );
    }

    #[test]
    fn test_missing_timestamps_is_missing_field() {
        let data = serde_json::json!({ "number": 1, "title": "t" });
        let err = format(&issue_notification(data)).unwrap_err();
        assert!(matches!(err, AppError::MissingField { .. }));
    }

    #[test]
    fn test_bad_date_is_format_error() {
        let mut data = sample_data();
        data["updatedAt"] = "yesterday".into();
        let err = format(&issue_notification(data)).unwrap_err();
        assert!(matches!(err, AppError::Format { .. }));
    }

    #[test]
    fn test_wrong_payload_shape_is_format_error() {
        let notification = issue_notification(serde_json::json!({ "unexpected": true }));
        let err = format(&notification).unwrap_err();
        assert!(matches!(err, AppError::Format { .. }));
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let notification = issue_notification(sample_data());
        assert_eq!(format(&notification).unwrap(), format(&notification).unwrap());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("create"), "Create");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("a"), "A");
    }
}
