use chrono::{DateTime, NaiveDate, Utc};

pub const DATE_FMT: &str = "%Y-%m-%d";

/// Today's date (UTC), the fallback for absent or unparseable source dates.
pub fn today() -> String {
    Utc::now().format(DATE_FMT).to_string()
}

/// Best-effort normalization of an upstream date string to `YYYY-MM-DD`.
///
/// Feeds carry RFC 2822 (`pubDate`) or RFC 3339 (`published`/`updated`)
/// timestamps; HTML `datetime` attributes are usually RFC 3339 or already
/// date-prefixed, in which case the first ten characters are taken as-is.
pub fn normalize(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc).format(DATE_FMT).to_string());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).format(DATE_FMT).to_string());
    }
    if let Some(prefix) = raw.get(..10) {
        if NaiveDate::parse_from_str(prefix, DATE_FMT).is_ok() {
            return Some(prefix.to_string());
        }
    }
    None
}

pub fn normalize_or_today(raw: &str) -> String {
    normalize(raw).unwrap_or_else(today)
}

/// Parse a literal date string against an ordered list of formats, for
/// sites that print dates as text rather than machine-readable attributes.
pub fn parse_with_formats(raw: &str, formats: &[&str]) -> Option<String> {
    let raw = raw.trim();
    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .map(|d| d.format(DATE_FMT).to_string())
}
