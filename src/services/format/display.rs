//! Static display lookup tables.
//!
//! Maps Linear's small enumerations (priority level, workflow status) to
//! the emoji and embed colors used in Discord messages. Both lookups are
//! total: unknown or absent input falls back to a fixed default.

/// Linear's brand blue, used wherever no status-specific color applies.
pub const LINEAR_BLUE: u32 = 0x5E6AD2;

/// Emoji for a Linear priority level (0 = none .. 4 = urgent).
///
/// Values outside 0..=4, and `None`, render as the no-priority symbol.
pub fn priority_emoji(priority: Option<u8>) -> &'static str {
    match priority {
        Some(1) => "⬇️",
        Some(2) => "⏺️",
        Some(3) => "⬆️",
        Some(4) => "🔥",
        _ => "🔘",
    }
}

/// Embed accent color for a workflow status name.
///
/// Matching is case-insensitive; unknown or absent statuses fall back to
/// [`LINEAR_BLUE`].
pub fn status_color(status: Option<&str>) -> u32 {
    let Some(status) = status else {
        return LINEAR_BLUE;
    };
    match status.to_lowercase().as_str() {
        "done" | "completed" => 0x77B255,
        "in progress" => 0xF2C94C,
        "in review" => 0xFFC107,
        "canceled" => 0x95A2B3,
        "blocked" => 0xFF5722,
        _ => LINEAR_BLUE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_priority_emoji_known_levels() {
        assert_eq!(priority_emoji(Some(0)), "🔘");
        assert_eq!(priority_emoji(Some(1)), "⬇️");
        assert_eq!(priority_emoji(Some(2)), "⏺️");
        assert_eq!(priority_emoji(Some(3)), "⬆️");
        assert_eq!(priority_emoji(Some(4)), "🔥");
    }

    #[test]
    fn test_priority_emoji_absent_matches_zero() {
        assert_eq!(priority_emoji(None), priority_emoji(Some(0)));
    }

    #[test]
    fn test_status_color_case_insensitive() {
        assert_eq!(status_color(Some("Done")), 0x77B255);
        assert_eq!(status_color(Some("DONE")), 0x77B255);
        assert_eq!(status_color(Some("done")), 0x77B255);
        assert_eq!(status_color(Some("In Progress")), 0xF2C94C);
        assert_eq!(status_color(Some("In Review")), 0xFFC107);
        assert_eq!(status_color(Some("Canceled")), 0x95A2B3);
        assert_eq!(status_color(Some("Blocked")), 0xFF5722);
    }

    #[test]
    fn test_status_color_fallback() {
        assert_eq!(status_color(None), LINEAR_BLUE);
        assert_eq!(status_color(Some("Backlog")), LINEAR_BLUE);
        assert_eq!(status_color(Some("")), LINEAR_BLUE);
    }

    proptest! {
        #[test]
        fn prop_priority_emoji_is_total_and_non_empty(priority in proptest::option::of(any::<u8>())) {
            let emoji = priority_emoji(priority);
            prop_assert!(!emoji.is_empty());
        }

        #[test]
        fn prop_out_of_range_priority_matches_zero(priority in 5u8..) {
            prop_assert_eq!(priority_emoji(Some(priority)), priority_emoji(Some(0)));
        }

        #[test]
        fn prop_status_color_ignores_case(status in "[a-zA-Z ]{0,20}") {
            let lower = status.to_lowercase();
            let upper = status.to_uppercase();
            prop_assert_eq!(status_color(Some(&lower)), status_color(Some(&upper)));
        }
    }
}
