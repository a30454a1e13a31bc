//! Shared utility functions used across multiple modules.

use chrono::{DateTime, Datelike, Utc};

/// Normalize optional text by trimming whitespace and removing empties.
///
/// Returns `None` when the input is `None` or the trimmed value is empty.
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Check if a string starts with `http://` or `https://`.
pub fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Truncate text to at most 180 characters for error messages.
pub fn compact_text(value: &str) -> String {
    value.trim().chars().take(180).collect()
}

/// First `max_chars` characters of `value`.
pub fn char_preview(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}

/// Search input as sent to the server, or `None` when there is nothing to search.
pub fn normalize_search_query(raw: &str) -> Option<String> {
    normalize_text_option(Some(raw.to_string()))
}

/// Up to two uppercase initials from a display name.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Format a timestamp as ordinal day, short month, and year (`21st Jan 2025`).
pub fn format_ordinal_date(timestamp: DateTime<Utc>) -> String {
    let day = timestamp.day();
    format!(
        "{day}{} {}",
        ordinal_suffix(day),
        timestamp.format("%b %Y")
    )
}

const fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
