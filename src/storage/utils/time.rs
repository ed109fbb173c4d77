// Timestamp parsing for remote last-modified values
use chrono::{DateTime, NaiveDateTime};

/// Offset-less layouts seen in container listings and object headers. All of
/// them are read as UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parse a remote last-modified string into unix epoch seconds.
pub fn parse_timestamp(value: &str) -> Option<i64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.timestamp());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.timestamp());
    }

    let naive = value
        .strip_suffix(" UTC")
        .or_else(|| value.strip_suffix('Z'))
        .unwrap_or(value);
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(naive, format).ok())
        .map(|dt| dt.and_utc().timestamp())
}

/// Like [`parse_timestamp`], falling back to the epoch for unreadable values.
pub fn timestamp_or_default(value: &str) -> i64 {
    parse_timestamp(value).unwrap_or_else(|| {
        log::warn!("unparseable last-modified value {value:?}, defaulting to 0");
        0
    })
}
