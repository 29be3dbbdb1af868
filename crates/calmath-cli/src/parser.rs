use anyhow::{anyhow, Result};
use calmath_core::instant::parse_instant_in;
use chrono::{DateTime, SecondsFormat, Utc};
use chrono_english::{parse_date_string, Dialect};
use chrono_tz::Tz;
use tracing::debug;

use crate::config::DateInput;

/// Resolve a date argument to an instant.
///
/// ISO 8601 input is read with offset-less times in `tz`. With
/// [`DateInput::Natural`], phrases like "tomorrow" or "next friday 9am"
/// are accepted too, relative to `now`.
pub fn parse_date_arg(input: &str, tz: Tz, mode: DateInput, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
    let iso_error = match parse_instant_in(input, &tz) {
        Ok(instant) => return Ok(instant),
        Err(e) => e,
    };

    if mode == DateInput::Iso {
        return Err(iso_error.into());
    }

    debug!(input, "falling back to natural language date parsing");
    parse_date_string(input, now.with_timezone(&tz), Dialect::Us)
        .map(|local| local.with_timezone(&Utc))
        .map_err(|_| anyhow!(iso_error))
}

/// ISO form handed to the string-based calendar functions.
pub fn canonical(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
