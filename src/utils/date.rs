//! Date helpers for normalizing API timestamps.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Reduce an RFC 3339 timestamp to its UTC calendar day (`YYYY-MM-DD`).
///
/// Values that already are a bare date pass through. Anything else keeps its
/// first ten characters when they form a date, and becomes empty otherwise.
pub fn calendar_day(timestamp: &str) -> String {
    let timestamp = timestamp.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return dt.with_timezone(&Utc).format("%Y-%m-%d").to_string();
    }

    timestamp
        .get(..10)
        .filter(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").is_ok())
        .map(str::to_owned)
        .unwrap_or_default()
}

/// Current UTC time as RFC 3339 with millisecond precision.
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
