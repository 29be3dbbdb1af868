//! Week numbering and searches for upcoming weekdays.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, TimeZone, Weekday};
use tracing::trace;

use crate::instant::weekday_index;
use crate::timezone::resolve_local_datetime;

/// A Friday the 13th occurs at most 14 months after any month.
const MAX_FRIDAY_13TH_CANDIDATES: usize = 14;

/// Week of the year, where week 1 is the week (Monday to Sunday) holding
/// January 1.
///
/// Both `date` and January 1 are moved back to the Monday on or before
/// them; the week number is the whole weeks between those Mondays plus one.
/// Days before the first Monday of the year therefore fall in week 1.
pub fn get_week_number_by_date<D: Datelike>(date: &D) -> u32 {
    let since_jan1 = date.ordinal0();
    let date_back_to_monday = date.weekday().num_days_from_monday();
    // Weekday of January 1, walked back from `date` by its ordinal
    let jan1_back_to_monday = (date_back_to_monday + 7 - since_jan1 % 7) % 7;

    (since_jan1 + jan1_back_to_monday - date_back_to_monday) / 7 + 1
}

/// Days until the next Friday; a Friday maps to the following week.
#[inline]
fn days_until_next_friday(weekday: Weekday) -> u64 {
    let friday = weekday_index(Weekday::Fri);
    let today = weekday_index(weekday);
    if today == friday {
        7
    } else {
        u64::from((friday + 7 - today) % 7)
    }
}

/// `date` at the wall-clock time of `instant`, in the zone of `instant`.
///
/// Steps are taken on calendar dates so an intermediate day never has to
/// hold the time; only the result is localized, moving past a DST gap.
fn at_wall_clock<Tz: TimeZone>(instant: &DateTime<Tz>, date: NaiveDate) -> Option<DateTime<Tz>> {
    resolve_local_datetime(&instant.timezone(), date.and_time(instant.time()))
}

/// The next Friday strictly after `instant`, keeping its wall-clock time.
///
/// When that time is skipped by a DST transition on the Friday, the result
/// is one hour later. `None` only past the end of the supported date range.
pub fn get_next_friday<Tz: TimeZone>(instant: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let offset = days_until_next_friday(instant.weekday());
    let friday = instant.date_naive().checked_add_days(Days::new(offset))?;
    at_wall_clock(instant, friday)
}

/// The first Friday the 13th on or after `instant`'s month.
///
/// The search starts at the 13th of the current month when the day of
/// month is 13 or less, otherwise at the 13th of the following month, so an
/// input that is itself a Friday the 13th is returned as is. Wall-clock
/// time is kept, moved forward one hour if a DST gap skips it.
pub fn get_next_friday_the_13th<Tz: TimeZone>(instant: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let today = instant.date_naive();
    let mut candidate = today.with_day(13)?;
    if today.day() > 13 {
        candidate = candidate.checked_add_months(Months::new(1))?;
    }

    for _ in 0..MAX_FRIDAY_13TH_CANDIDATES {
        if candidate.weekday() == Weekday::Fri {
            return at_wall_clock(instant, candidate);
        }
        trace!(year = candidate.year(), month = candidate.month(), "13th is not a Friday");
        candidate = candidate.checked_add_months(Months::new(1))?;
    }
    None
}
