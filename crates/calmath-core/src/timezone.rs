use crate::error::CalendarError;
use chrono::{DateTime, Duration, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use std::str::FromStr;
use tracing::debug;

/// Parse an IANA timezone name
pub fn parse_timezone(timezone: &str) -> Result<Tz, CalendarError> {
    Tz::from_str(timezone.trim())
        .map_err(|_| CalendarError::InvalidTimezone(timezone.to_string()))
}

/// Validate IANA timezone name
pub fn validate_timezone(timezone: &str) -> Result<(), CalendarError> {
    parse_timezone(timezone).map(|_| ())
}

/// Get timezone offset string for display (e.g., "-05:00")
pub fn get_timezone_offset<Z: TimeZone>(tz: &Z, at_time: DateTime<Utc>) -> String {
    let offset = at_time.with_timezone(tz).offset().fix();
    let seconds = offset.local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.abs() / 60;
    format!("{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
}

/// Attach `tz` to a wall-clock date-time.
///
/// An ambiguous time (DST fall back) resolves to the earlier instant. A time
/// skipped by a DST gap moves forward one hour. `None` only when neither
/// exists, which no real zone produces.
pub fn resolve_local_datetime<Z: TimeZone>(tz: &Z, naive: NaiveDateTime) -> Option<DateTime<Z>> {
    tz.from_local_datetime(&naive).earliest().or_else(|| {
        debug!(%naive, "wall-clock time falls in a DST gap, moving forward one hour");
        naive
            .checked_add_signed(Duration::hours(1))
            .and_then(|shifted| tz.from_local_datetime(&shifted).earliest())
    })
}

/// Get timezone abbreviation (e.g., "EST", "EDT")
pub fn get_timezone_abbreviation(tz: &Tz, at_time: DateTime<Utc>) -> String {
    at_time.with_timezone(tz).format("%Z").to_string()
}
