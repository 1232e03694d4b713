// Timestamp helpers
// Everything arrives as ISO-8601 strings and must be parsed before arithmetic

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parses an ISO-8601 timestamp, tolerating the naive variants the
/// analytics backend emits (no offset, space separator). `None` for
/// anything unparsable; callers decide the fallback.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(naive.and_utc());
        }
    }
    None
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Display label for a calendar date, e.g. "Jan 02". Labels are never
/// used for ordering; the raw date key is.
pub fn format_month_day(date: NaiveDate) -> String {
    date.format("%b %d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_rfc3339_with_offset() {
        let ts = parse_timestamp("2025-01-02T10:00:00Z").unwrap();
        assert_eq!(ts.hour(), 10);
    }

    #[test]
    fn parses_naive_variants() {
        assert!(parse_timestamp("2025-01-02T10:00:00").is_some());
        assert!(parse_timestamp("2025-01-02 10:00:00.123").is_some());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("not-a-time").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn month_day_label() {
        let date = parse_date("2025-01-02").unwrap();
        assert_eq!(format_month_day(date), "Jan 02");
    }
}
