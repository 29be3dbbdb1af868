//! # Calmath Core Library
//!
//! Stateless calendar arithmetic on the proleptic Gregorian calendar:
//! timestamp conversion, weekday naming, period containment, week
//! numbering, quarters, leap years, weekend counts and recurring
//! work schedules.
//!
//! ## Conventions
//!
//! - Functions taking a date *string* return `Option`. `None` marks an
//!   invalid instant; nothing here panics on bad input.
//! - ISO 8601 strings (`YYYY-MM-DD[THH:mm:ss.sssZ]`) are used everywhere
//!   except the work schedule, which reads and writes `DD-MM-YYYY`.
//! - "Local" views take an explicit zone (`chrono::Utc`, a
//!   `chrono::FixedOffset` or a `chrono_tz::Tz`).
//!
//! ## Core Modules
//!
//! - [`instant`]: Date string parsing and weekday names
//! - [`format`]: Timestamps and display formatting
//! - [`period`]: Inclusive periods, day counts and containment
//! - [`month`]: Days and weekends per month, quarters, leap years
//! - [`week`]: Week numbers, next Friday, next Friday the 13th
//! - [`schedule`]: Work/off-day rotation schedules
//! - [`timezone`]: IANA zone lookup and display helpers
//! - [`error`]: Error type for typed constructors
//!
//! ## Example Usage
//!
//! ```rust
//! use calmath_core::{
//!     month::get_count_days_in_month,
//!     period::DatePeriod,
//!     schedule::get_work_schedule,
//!     week::get_week_number_by_date,
//! };
//! use chrono::NaiveDate;
//!
//! assert_eq!(get_count_days_in_month(2, 2024), Ok(29));
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
//! assert_eq!(get_week_number_by_date(&date), 5);
//!
//! let shifts = get_work_schedule(DatePeriod::new("01-01-2024", "15-01-2024"), 1, 3).unwrap();
//! assert_eq!(shifts, ["01-01-2024", "05-01-2024", "09-01-2024", "13-01-2024"]);
//! ```

pub mod error;
pub mod format;
pub mod instant;
pub mod month;
pub mod period;
pub mod schedule;
pub mod timezone;
pub mod week;

pub use error::CalendarError;
pub use instant::CalendarInstant;
pub use month::Quarter;
pub use period::DatePeriod;
pub use schedule::WorkSchedulePattern;
