//! Time related utils.

use crate::{Error, Result};
use chrono::{NaiveDateTime, Utc};

/// The instant type used across streamsign, always in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// Return the current instant.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format a date in `YYYYMMDD` style, e.g. `20131128`.
pub fn format_date(t: DateTime) -> String {
    t.format("%Y%m%d").to_string()
}

/// Format a timestamp in basic ISO 8601 style, e.g. `20131128T150405Z`.
pub fn format_iso8601(t: DateTime) -> String {
    t.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Parse an RFC 3339 timestamp like `2013-11-27T23:22:34Z`.
pub fn parse_rfc3339(s: &str) -> Result<DateTime> {
    let t = chrono::DateTime::parse_from_rfc3339(s)
        .map_err(|e| Error::unexpected(format!("parse {s} as rfc3339 failed")).with_source(e))?;
    Ok(t.with_timezone(&Utc))
}

/// Parse an RFC 2822 timestamp like `Thu, 28 Nov 2013 15:04:05 GMT`.
pub fn parse_rfc2822(s: &str) -> Result<DateTime> {
    let t = chrono::DateTime::parse_from_rfc2822(s)
        .map_err(|e| Error::unexpected(format!("parse {s} as rfc2822 failed")).with_source(e))?;
    Ok(t.with_timezone(&Utc))
}

/// Parse a basic ISO 8601 timestamp like `20131128T150405Z`.
pub fn parse_iso8601(s: &str) -> Result<DateTime> {
    let t = NaiveDateTime::parse_from_str(s, "%Y%m%dT%H%M%SZ")
        .map_err(|e| Error::unexpected(format!("parse {s} as iso8601 failed")).with_source(e))?;
    Ok(t.and_utc())
}
