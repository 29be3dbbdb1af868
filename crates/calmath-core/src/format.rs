//! Timestamp conversion and display formatting.

use chrono::{Datelike, TimeZone, Utc};

use crate::instant::{day_name, instant_in_or_none, instant_or_none, CalendarInstant};

/// Milliseconds since the Unix epoch, or `None` for an unparseable date.
pub fn date_to_timestamp(date: &str) -> Option<i64> {
    instant_or_none(date).map(|instant| instant.timestamp_millis())
}

/// Inverse of [`date_to_timestamp`].
pub fn timestamp_to_instant(millis: i64) -> Option<CalendarInstant> {
    Utc.timestamp_millis_opt(millis).single()
}

/// Zero-padded 24-hour `HH:MM:SS` of `instant` as seen in `tz`.
pub fn get_time<Z: TimeZone>(instant: &CalendarInstant, tz: &Z) -> String
where
    Z::Offset: std::fmt::Display,
{
    instant.with_timezone(tz).format("%H:%M:%S").to_string()
}

/// Formats a date as `M/D/YYYY, h:mm:ss AM|PM` in UTC.
///
/// Month, day and hour are not padded; minutes and seconds are.
pub fn format_date(date: &str) -> Option<String> {
    instant_or_none(date).map(|instant| format_instant(&instant))
}

/// [`format_date`] for an already parsed instant.
pub fn format_instant(instant: &CalendarInstant) -> String {
    instant.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

/// English weekday name of `date` as seen in `tz`.
///
/// A date-time without offset is wall-clock time in `tz`.
pub fn get_day_name<Z: TimeZone>(date: &str, tz: &Z) -> Option<&'static str> {
    instant_in_or_none(date, tz).map(|instant| day_name(instant.with_timezone(tz).weekday()))
}
