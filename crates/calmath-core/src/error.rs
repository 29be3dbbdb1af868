use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid date '{input}': expected {expected}")]
    InvalidDate { input: String, expected: &'static str },

    #[error("Invalid month: {0} (must be 1..=12)")]
    InvalidMonth(u32),

    #[error("Invalid work schedule: {work_days} work day(s) and {off_days} off day(s) make an empty cycle")]
    InvalidSchedule { work_days: u32, off_days: u32 },

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Date out of range: {0}")]
    OutOfRange(String),
}

impl CalendarError {
    pub(crate) fn invalid_date(input: &str, expected: &'static str) -> Self {
        CalendarError::InvalidDate {
            input: input.to_string(),
            expected,
        }
    }
}
