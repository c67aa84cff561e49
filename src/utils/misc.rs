use chrono::{NaiveDate, NaiveDateTime};

use crate::constants::*;

/// Format a calendar date as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Format a timestamp for message footers
pub fn format_date_time(ts: NaiveDateTime) -> String {
    ts.format(DATE_TIME_FORMAT).to_string()
}

/// Only show the first few characters of a secret
pub fn mask_token(token: &str) -> String {
    let visible: String = token.chars().take(TOKEN_VISIBLE_CHARS).collect();
    format!("{visible}...")
}

/// Escape text interpolated into an HTML parse-mode message
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_and_parse_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 4).unwrap();
        assert_eq!(format_date(date), "2024-01-04");
        assert_eq!(parse_date("2024-01-04"), Some(date));
    }

    #[test]
    fn test_parse_date_invalid() {
        assert_eq!(parse_date("2024/01/04"), None);
        assert_eq!(parse_date("2024-02-30"), None);
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_format_date_time() {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 4)
            .unwrap()
            .and_hms_opt(9, 5, 7)
            .unwrap();
        assert_eq!(format_date_time(ts), "2024-01-04 09:05:07");
    }

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("1234567890:ABCDEF"), "1234567890...");
        assert_eq!(mask_token("abc"), "abc...");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
        assert_eq!(escape_html("备份数据库"), "备份数据库");
    }
}
