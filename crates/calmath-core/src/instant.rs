//! Parsing of date strings into absolute instants.
//!
//! Every string-accepting operation in this crate goes through
//! [`parse_instant`]. Operations that must not fail hand back `None`
//! instead of an error, so an unparseable date turns into an "invalid
//! instant" that the caller checks for.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc, Weekday};
use tracing::debug;

use crate::error::CalendarError;

/// An absolute point on the timeline.
pub type CalendarInstant = DateTime<Utc>;

pub(crate) const ISO_EXPECTED: &str = "an ISO 8601 date (YYYY-MM-DD[THH:mm:ss.sssZ])";

/// Local date-time layouts, tried in order after RFC 3339 and date-only input.
/// The last one is the output of [`crate::format::format_date`].
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y, %I:%M:%S %p",
];

/// English weekday names indexed from Sunday.
pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Parses `input`, reading offset-less date-times as UTC.
pub fn parse_instant(input: &str) -> Result<CalendarInstant, CalendarError> {
    parse_instant_in(input, &Utc)
}

/// Parses `input`, reading offset-less date-times as wall-clock time in `tz`.
///
/// Accepted forms:
/// - RFC 3339 (`2024-01-03T10:00:00Z`, `2024-01-03T10:00:00.123+02:00`)
/// - a bare date (`2024-01-03`), always midnight UTC
/// - a date-time without offset (`2024-01-03T10:00`, `2024-01-03 10:00:00`)
/// - the [`crate::format::format_date`] layout (`1/3/2024, 10:00:00 AM`)
///
/// A wall-clock time skipped by a DST transition is rejected; an ambiguous
/// one resolves to the earlier instant.
pub fn parse_instant_in<Z: TimeZone>(input: &str, tz: &Z) -> Result<CalendarInstant, CalendarError> {
    let trimmed = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc());
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| CalendarError::invalid_date(input, ISO_EXPECTED))?;

    tz.from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| CalendarError::invalid_date(input, "a wall-clock time that exists in the zone"))
}

/// Sentinel form of [`parse_instant`].
pub(crate) fn instant_or_none(input: &str) -> Option<CalendarInstant> {
    instant_in_or_none(input, &Utc)
}

/// Sentinel form of [`parse_instant_in`].
pub(crate) fn instant_in_or_none<Z: TimeZone>(input: &str, tz: &Z) -> Option<CalendarInstant> {
    match parse_instant_in(input, tz) {
        Ok(instant) => Some(instant),
        Err(e) => {
            debug!(input, error = %e, "treating input as invalid instant");
            None
        }
    }
}

/// Weekday number with Sunday as 0 and Saturday as 6.
#[inline]
pub fn weekday_index(weekday: Weekday) -> u32 {
    weekday.num_days_from_sunday()
}

/// English name of a weekday.
#[inline]
pub fn day_name(weekday: Weekday) -> &'static str {
    DAY_NAMES[weekday_index(weekday) as usize]
}
