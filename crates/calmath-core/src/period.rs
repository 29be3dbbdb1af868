//! Inclusive date periods and range queries over them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::instant::{instant_or_none, parse_instant, CalendarInstant};
use crate::schedule::parse_dmy;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// A closed interval `[start, end]`.
///
/// `start <= end` is not checked; a reversed period simply contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatePeriod<T> {
    pub start: T,
    pub end: T,
}

impl<T> DatePeriod<T> {
    pub fn new(start: T, end: T) -> Self {
        Self { start, end }
    }
}

impl<T: PartialOrd> DatePeriod<T> {
    /// Returns whether `value` lies within the period, bounds included.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.start <= *value && *value <= self.end
    }
}

impl<'a> DatePeriod<&'a str> {
    /// Parses both bounds as ISO 8601 instants.
    pub fn parse_iso(&self) -> Result<DatePeriod<CalendarInstant>, CalendarError> {
        Ok(DatePeriod::new(parse_instant(self.start)?, parse_instant(self.end)?))
    }

    /// Parses both bounds as `DD-MM-YYYY` calendar dates.
    pub fn parse_dmy(&self) -> Result<DatePeriod<NaiveDate>, CalendarError> {
        Ok(DatePeriod::new(parse_dmy(self.start)?, parse_dmy(self.end)?))
    }
}

impl DatePeriod<CalendarInstant> {
    /// Inclusive day count, flooring partial days.
    pub fn count_days(&self) -> i64 {
        let elapsed = (self.end - self.start).num_milliseconds();
        elapsed.div_euclid(MILLIS_PER_DAY) + 1
    }
}

/// Inclusive number of days between two ISO dates.
///
/// Computed as `floor((end - start) / 1 day) + 1`, so a time-of-day
/// difference short of a whole day does not add a day. A reversed period
/// gives zero or a negative count.
pub fn get_count_days_on_period(start: &str, end: &str) -> Option<i64> {
    let period = DatePeriod::new(instant_or_none(start)?, instant_or_none(end)?);
    Some(period.count_days())
}

/// Whether `date` lies within `period`, both bounds inclusive.
pub fn is_date_in_period(date: &str, period: DatePeriod<&str>) -> Option<bool> {
    let date = instant_or_none(date)?;
    let period = DatePeriod::new(instant_or_none(period.start)?, instant_or_none(period.end)?);
    Some(period.contains(&date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2024-01-01", "2024-01-01", 1)]
    #[case("2024-01-01", "2024-01-31", 31)]
    #[case("2024-02-01", "2024-03-01", 30)]
    #[case("2023-02-01", "2023-03-01", 29)]
    #[case("2023-12-31", "2024-01-01", 2)]
    #[case("2024-01-01T00:00:00Z", "2024-01-02T23:59:59Z", 2)]
    #[case("2024-01-01T12:00:00Z", "2024-01-02T06:00:00Z", 1)]
    #[case("2024-01-05", "2024-01-01", -3)]
    #[case("2024-01-01T12:00:00Z", "2024-01-01T00:00:00Z", 0)]
    fn test_get_count_days_on_period(#[case] start: &str, #[case] end: &str, #[case] expected: i64) {
        assert_eq!(get_count_days_on_period(start, end), Some(expected));
    }

    #[test]
    fn test_get_count_days_on_period_invalid() {
        assert_eq!(get_count_days_on_period("bad", "2024-01-01"), None);
        assert_eq!(get_count_days_on_period("2024-01-01", "bad"), None);
    }

    #[rstest]
    #[case("2024-02-02", true)]
    #[case("2024-03-02", true)]
    #[case("2024-02-15T08:00:00Z", true)]
    #[case("2024-02-01T23:59:59Z", false)]
    #[case("2024-03-02T00:00:01Z", false)]
    fn test_is_date_in_period(#[case] date: &str, #[case] expected: bool) {
        let period = DatePeriod::new("2024-02-02", "2024-03-02");
        assert_eq!(is_date_in_period(date, period), Some(expected));
    }

    #[test]
    fn test_is_date_in_reversed_period() {
        let period = DatePeriod::new("2024-03-02", "2024-02-02");
        assert_eq!(is_date_in_period("2024-02-15", period), Some(false));
    }

    #[test]
    fn test_is_date_in_period_invalid() {
        let period = DatePeriod::new("2024-02-02", "2024-03-02");
        assert_eq!(is_date_in_period("someday", period), None);
        assert_eq!(is_date_in_period("2024-02-10", DatePeriod::new("x", "2024-03-02")), None);
    }

    #[test]
    fn test_parse_bounds() {
        let iso = DatePeriod::new("2024-01-01", "2024-01-10").parse_iso().unwrap();
        assert_eq!(iso.count_days(), 10);

        let dmy = DatePeriod::new("01-01-2024", "10-01-2024").parse_dmy().unwrap();
        assert!(dmy.contains(&NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()));
        assert!(DatePeriod::new("2024-01-01", "10-01-2024").parse_iso().is_err());
    }

    #[test]
    fn test_period_serde() {
        let period = DatePeriod::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        );
        let json = serde_json::to_string(&period).unwrap();
        assert_eq!(json, r#"{"start":"2024-01-01","end":"2024-01-15"}"#);
    }
}
