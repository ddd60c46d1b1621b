use std::borrow::Cow;

use chrono::{Local, NaiveDate, Utc};
use lazy_static::lazy_static;
use regex::Regex;

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today in UTC, as `YYYY-MM-DD`
pub fn today_utc() -> String {
    format_date(&Utc::now().date_naive())
}

/// Today in the local timezone, as `YYYY-MM-DD`
pub fn today_local() -> String {
    format_date(&Local::now().date_naive())
}

/// Replaces `[text](url)` with `text` and drops `*`, `_` and backticks.
pub fn strip_markdown(line: &str) -> String {
    lazy_static! {
        static ref LINK_REGEX: Regex = Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap();
    }

    let unlinked = LINK_REGEX.replace_all(line, "$1");
    unlinked.chars()
        .filter(|c| !matches!(c, '*' | '_' | '`'))
        .collect()
}

/// Keeps the first `max_chars` characters. Never splits a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => Cow::Owned(text[..byte_idx].to_string()),
        None => Cow::Borrowed(text),
    }
}

/// Quotes a value for a YAML single-quoted scalar
pub fn single_quoted(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
