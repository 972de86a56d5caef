use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use common::{
    format_clock, util::millis_to_seconds, ChatEvent, GameSummary, PlayerColor, GAME_SPEED,
    NO_CHAT_LINE, UNKNOWN_DATE, UNKNOWN_DURATION, UNKNOWN_PLAYER, UNKNOWN_TIME,
};
use std::path::Path;

/// Start time embedded in a replay file name, e.g. `MP Replay v101.103 @2025.09.22 185103 (2).aoe2record`.
/// Text trailing the six time digits is ignored.
pub fn parse_file_timestamp(file_name: &str) -> Option<NaiveDateTime> {
    let stamp = file_name.split('@').nth(1)?;
    let mut tokens = stamp.split_whitespace();
    let date = NaiveDate::parse_from_str(tokens.next()?, "%Y.%m.%d").ok()?;
    let (time, _) = NaiveTime::parse_and_remainder(tokens.next()?, "%H%M%S").ok()?;
    Some(date.and_time(time))
}

/// `("September 22, 2025", "18:51")`, or the unknown placeholders
pub fn format_file_timestamp(file_name: &str) -> (String, String) {
    match parse_file_timestamp(file_name) {
        Some(ts) => (
            ts.format("%B %d, %Y").to_string(),
            ts.format("%H:%M").to_string(),
        ),
        None => (UNKNOWN_DATE.to_string(), UNKNOWN_TIME.to_string()),
    }
}

/// Wall-clock length of the game as `HH:MM:SS`
pub fn format_duration(summary: Option<&GameSummary>) -> String {
    summary
        .and_then(|s| s.duration)
        .filter(|&ms| ms > 0)
        .map(|ms| format_clock((ms as f64 / 1000.0 / GAME_SPEED) as u64))
        .unwrap_or_else(|| UNKNOWN_DURATION.to_string())
}

/// `September 22, 2025 at 18:51 (Duration: 00:41:12)`
pub fn format_header(path: &Path, summary: Option<&GameSummary>) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    let (date, time) = format_file_timestamp(&file_name);
    format!(
        "{} at {} (Duration: {})",
        date,
        time,
        format_duration(summary)
    )
}

/// One colored transcript line: `[00:01:05] Hera (Red): gg`
pub fn format_chat_line(summary: &GameSummary, event: &ChatEvent) -> String {
    let sender = event.player_number.and_then(|number| summary.player(number));
    let (name, color) = match sender {
        Some(player) => (player.name.as_str(), player.color()),
        None => (UNKNOWN_PLAYER, PlayerColor::Unknown),
    };
    let line = format!(
        "[{}] {} ({}): {}",
        format_clock(millis_to_seconds(event.timestamp)),
        name,
        color,
        event.message
    );
    color.paint(&line)
}

/// The chat block printed below a game header
pub fn format_chat(summary: &GameSummary) -> String {
    if summary.chat.is_empty() {
        return format!("{}\n", NO_CHAT_LINE);
    }

    let lines: Vec<String> = summary
        .chat
        .iter()
        .map(|event| format_chat_line(summary, event))
        .collect();
    format!("{}\n\n", lines.join("\n"))
}

/// Printed in place of the chat block when a replay could not be decoded
pub fn format_decode_error(path: &Path, error: &anyhow::Error) -> String {
    format!("Error parsing replay {}: {:#}\n", path.display(), error)
}
