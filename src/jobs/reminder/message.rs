use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    constants::*,
    utils::{escape_html, format_date, format_date_time},
};

const TRUNCATION_NOTICE: &str = "...\n\nMessage truncated, see the reminders file for the full list";

/// Text for a single due reminder
pub fn reminder_fragment(name: &str, last_updated: &str, days: i64) -> String {
    format!(
        "🔔 Reminder: {} needs an update today\n📅 Last updated: {}\n⏰ Interval: every {} days",
        escape_html(name),
        escape_html(last_updated),
        days
    )
}

/// All due reminders as one numbered message with a timestamp footer
pub fn combined_message(fragments: &[String], now: NaiveDateTime) -> String {
    let mut message = String::from("📢 <b>Today's update reminders</b>\n\n");
    for (i, fragment) in fragments.iter().enumerate() {
        message.push_str(&format!("{}. {}\n\n", i + 1, fragment));
    }
    message.push_str(&format!("⏰ Sent at: {}", format_date_time(now)));
    message
}

pub fn no_reminders_message() -> String {
    "ℹ️ <b>Reminder service</b>\nNo reminder items are configured\nAdd items to the reminders file to get started"
        .to_string()
}

/// Status ping sent when nothing is due
pub fn all_clear_message(today: NaiveDate, total: usize) -> String {
    format!(
        "✅ <b>Daily reminder check complete</b>\n📅 Checked on: {}\n📊 Total reminders: {}\n🔔 Due today: 0\n\n⏰ Next check: {}",
        format_date(today),
        total,
        NEXT_CHECK_HINT
    )
}

/// Fit a message into Telegram's length limit.
///
/// Telegram counts UTF-16 code units, so emoji outside the BMP count twice.
/// The cut happens on a line boundary so that no HTML entity or tag is split.
pub fn truncate_message(text: &str) -> String {
    if utf16_len(text) <= TELEGRAM_MAX_MESSAGE_LEN {
        return text.to_string();
    }
    let keep = TELEGRAM_MAX_MESSAGE_LEN - TRUNCATION_RESERVE;
    let mut used = 0;
    let mut cut = text.len();
    for (idx, ch) in text.char_indices() {
        used += ch.len_utf16();
        if used > keep {
            cut = idx;
            break;
        }
    }
    let head = &text[..cut];
    let head = head.rfind('\n').map_or(head, |idx| &head[..idx]);
    format!("{head}{TRUNCATION_NOTICE}")
}

pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}
