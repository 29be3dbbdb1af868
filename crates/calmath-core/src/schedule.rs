//! Shift-style work schedules over `DD-MM-YYYY` periods.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::CalendarError;
use crate::period::DatePeriod;

const DMY_FORMAT: &str = "%d-%m-%Y";

/// Parses a `DD-MM-YYYY` date.
pub fn parse_dmy(input: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(input.trim(), DMY_FORMAT)
        .map_err(|_| CalendarError::invalid_date(input, "a DD-MM-YYYY date"))
}

/// Formats a date as zero-padded `DD-MM-YYYY`.
pub fn format_dmy(date: NaiveDate) -> String {
    date.format(DMY_FORMAT).to_string()
}

/// A repeating block of work days followed by days off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkSchedulePattern {
    work_days: u32,
    off_days: u32,
}

impl WorkSchedulePattern {
    /// Creates a pattern. The cycle (`work_days + off_days`) must not be empty.
    pub fn new(work_days: u32, off_days: u32) -> Result<Self, CalendarError> {
        match work_days.checked_add(off_days) {
            Some(cycle) if cycle > 0 => Ok(Self { work_days, off_days }),
            _ => Err(CalendarError::InvalidSchedule { work_days, off_days }),
        }
    }

    pub fn work_days(&self) -> u32 {
        self.work_days
    }

    pub fn off_days(&self) -> u32 {
        self.off_days
    }

    /// Days from the start of one work block to the start of the next.
    #[inline]
    pub fn cycle_len(&self) -> u64 {
        u64::from(self.work_days) + u64::from(self.off_days)
    }

    /// Unbounded sequence of work-block starts beginning at `start`.
    pub fn iter_from(&self, start: NaiveDate) -> impl Iterator<Item = NaiveDate> {
        let step = Days::new(self.cycle_len());
        std::iter::successors(Some(start), move |current| current.checked_add_days(step))
    }

    /// First day of every work block in `period`.
    ///
    /// `period.start` is always included, even when it lies after
    /// `period.end`; generation stops at the first block start past the end.
    pub fn dates(&self, period: &DatePeriod<NaiveDate>) -> Vec<NaiveDate> {
        let mut dates = Vec::new();
        let mut current = period.start;
        loop {
            dates.push(current);
            match current.checked_add_days(Days::new(self.cycle_len())) {
                Some(next) if next <= period.end => current = next,
                _ => break,
            }
        }
        trace!(count = dates.len(), cycle = self.cycle_len(), "generated work schedule");
        dates
    }
}

/// Work-block start dates for a `DD-MM-YYYY` period, formatted the same way.
///
/// Returns `None` if either bound fails to parse or the cycle is empty.
pub fn get_work_schedule(
    period: DatePeriod<&str>,
    count_work_days: u32,
    count_off_days: u32,
) -> Option<Vec<String>> {
    let bounds = match period.parse_dmy() {
        Ok(bounds) => bounds,
        Err(e) => {
            debug!(error = %e, "invalid work schedule period");
            return None;
        }
    };
    let pattern = match WorkSchedulePattern::new(count_work_days, count_off_days) {
        Ok(pattern) => pattern,
        Err(e) => {
            debug!(error = %e, "invalid work schedule pattern");
            return None;
        }
    };

    Some(pattern.dates(&bounds).into_iter().map(format_dmy).collect())
}
