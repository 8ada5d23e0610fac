//! Display formatting for prices, dates, and text

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Format an amount in BDT currency.
///
/// ```rust
/// use lifeplus_core::format::format_price;
///
/// assert_eq!(format_price(49.5, true), "BDT 49.50");
/// assert_eq!(format_price(49.5, false), "49.50");
/// ```
#[must_use]
pub fn format_price(amount: f64, show_currency: bool) -> String {
    if show_currency {
        format!("BDT {amount:.2}")
    } else {
        format!("{amount:.2}")
    }
}

/// Format a timestamp as a calendar date (`YYYY-MM-DD`, UTC).
#[must_use]
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format a timestamp as an RFC 3339 datetime string.
#[must_use]
pub fn format_datetime(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Parse an ISO date or datetime string.
///
/// Accepts full RFC 3339 timestamps and bare `YYYY-MM-DD` dates (taken as
/// midnight UTC). Returns `None` for anything else.
#[must_use]
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Truncate a string to `max_length` characters, appending `...`.
#[must_use]
pub fn truncate(value: &str, max_length: usize) -> String {
    truncate_with(value, max_length, "...")
}

/// Truncate a string to `max_length` characters with a custom suffix.
///
/// Strings already within the limit are returned unchanged; truncation
/// counts characters, not bytes, so multibyte text stays intact.
#[must_use]
pub fn truncate_with(value: &str, max_length: usize, suffix: &str) -> String {
    if value.chars().count() <= max_length {
        return value.to_string();
    }

    let keep = max_length.saturating_sub(suffix.chars().count());
    let mut out: String = value.chars().take(keep).collect();
    out.push_str(suffix);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(120.0, true), "BDT 120.00");
        assert_eq!(format_price(99.999, false), "100.00");
    }

    #[test]
    fn test_format_date_and_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap();
        assert_eq!(format_date(&dt), "2024-03-15");
        assert_eq!(format_datetime(&dt), "2024-03-15T10:30:00.000Z");
    }

    #[test]
    fn test_parse_date() {
        let parsed = parse_date("2024-03-15").unwrap();
        assert_eq!(format_date(&parsed), "2024-03-15");

        let parsed = parse_date("2024-03-15T10:30:00Z").unwrap();
        assert_eq!(format_datetime(&parsed), "2024-03-15T10:30:00.000Z");

        assert!(parse_date("not a date").is_none());
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long description", 10), "a very ...");
        assert_eq!(truncate_with("abcdef", 5, "…"), "abcd…");
    }
}
