//! Month, quarter and leap-year queries.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CalendarError;

/// Quarter of the calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    /// Quarter containing `month` (1..=12).
    pub fn from_month(month: u32) -> Result<Self, CalendarError> {
        match month {
            1..=3 => Ok(Quarter::Q1),
            4..=6 => Ok(Quarter::Q2),
            7..=9 => Ok(Quarter::Q3),
            10..=12 => Ok(Quarter::Q4),
            _ => Err(CalendarError::InvalidMonth(month)),
        }
    }

    /// 1 through 4.
    pub fn number(self) -> u32 {
        match self {
            Quarter::Q1 => 1,
            Quarter::Q2 => 2,
            Quarter::Q3 => 3,
            Quarter::Q4 => 4,
        }
    }

    /// First month of the quarter.
    pub fn first_month(self) -> u32 {
        (self.number() - 1) * 3 + 1
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.number())
    }
}

/// Gregorian leap-year rule.
#[inline]
pub fn is_leap(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Whether the year of `date` is a leap year.
pub fn is_leap_year<D: Datelike>(date: &D) -> bool {
    is_leap(date.year())
}

/// Quarter of `date`, by month range.
pub fn get_quarter<D: Datelike>(date: &D) -> Quarter {
    match date.month() {
        1..=3 => Quarter::Q1,
        4..=6 => Quarter::Q2,
        7..=9 => Quarter::Q3,
        _ => Quarter::Q4,
    }
}

/// First day of `month` and first day of the following month.
fn month_bounds(month: u32, year: i32) -> Result<(NaiveDate, NaiveDate), CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth(month));
    }
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| CalendarError::OutOfRange(format!("{}-{:02}", year, month)))?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| CalendarError::OutOfRange(format!("{}-{:02}", year, month)))?;
    Ok((first, next))
}

/// Number of days in `month` of `year`.
pub fn get_count_days_in_month(month: u32, year: i32) -> Result<u32, CalendarError> {
    let (first, next) = month_bounds(month, year)?;
    Ok((next - first).num_days() as u32)
}

/// Number of Saturdays and Sundays in `month` of `year`.
pub fn get_count_weekends_in_month(month: u32, year: i32) -> Result<u32, CalendarError> {
    let (first, next) = month_bounds(month, year)?;
    let weekends = first
        .iter_days()
        .take_while(|day| *day < next)
        .filter(|day| matches!(day.weekday(), Weekday::Sat | Weekday::Sun))
        .count();
    Ok(weekends as u32)
}
