pub mod calendar;
pub mod friday;
pub mod instant;
pub mod period;
pub mod schedule;

use anyhow::{anyhow, Result};
use calmath_core::error::CalendarError;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::config::{DateInput, ScheduleConfig};
use crate::parser::parse_date_arg;

/// Settings shared by every command invocation
#[derive(Debug, Clone)]
pub struct Context {
    pub tz: Tz,
    pub json: bool,
    pub date_input: DateInput,
    pub schedule: ScheduleConfig,
    pub now: DateTime<Utc>,
}

impl Context {
    pub fn date(&self, input: &str) -> Result<DateTime<Utc>> {
        parse_date_arg(input, self.tz, self.date_input, self.now)
    }

    pub fn date_or_now(&self, input: Option<&str>) -> Result<DateTime<Utc>> {
        match input {
            Some(input) => self.date(input),
            None => Ok(self.now),
        }
    }
}

/// Error for a calendar function that reported an invalid instant.
pub(crate) fn invalid_instant(input: &str) -> anyhow::Error {
    anyhow!(CalendarError::InvalidDate {
        input: input.to_string(),
        expected: "a valid date",
    })
}
