//! Timestamp rendering for Discord.

use jiff::Timestamp;

use crate::error::{AppError, AppResult};

/// Renders an ISO-8601 date as a Discord relative-time token.
///
/// Discord expands `<t:{epoch}:R>` client-side into text like
/// "3 minutes ago". An unparseable date is a format error; a token
/// encoding garbage would render as raw text in the channel.
pub fn relative_timestamp(iso: &str) -> AppResult<String> {
    let ts = parse_iso(iso)?;
    Ok(format!("<t:{}:R>", ts.as_second()))
}

/// Normalizes an ISO-8601 date for the embed `timestamp` field.
pub fn embed_timestamp(iso: &str) -> AppResult<String> {
    Ok(parse_iso(iso)?.to_string())
}

fn parse_iso(iso: &str) -> AppResult<Timestamp> {
    iso.parse::<Timestamp>()
        .map_err(|e| AppError::format("timestamp", format!("invalid ISO-8601 date '{iso}': {e}")))
}
