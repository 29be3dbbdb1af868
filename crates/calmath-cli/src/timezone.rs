use calmath_core::error::CalendarError;
use calmath_core::timezone::{parse_timezone, validate_timezone};
use chrono_tz::Tz;

/// Detect system timezone
pub fn detect_system_timezone() -> String {
    // Try multiple detection methods
    if let Ok(tz) = std::env::var("TZ") {
        if !tz.is_empty() && validate_timezone(&tz).is_ok() {
            return tz;
        }
    }

    // Use iana-time-zone crate
    if let Ok(tz) = iana_time_zone::get_timezone() {
        if validate_timezone(&tz).is_ok() {
            return tz;
        }
    }

    // Fallback to UTC
    "UTC".to_string()
}

/// Get common timezones for suggestions
pub fn get_common_timezones() -> Vec<&'static str> {
    vec![
        "UTC",
        "America/New_York",
        "America/Chicago",
        "America/Denver",
        "America/Los_Angeles",
        "America/Toronto",
        "America/Sao_Paulo",
        "Europe/London",
        "Europe/Paris",
        "Europe/Berlin",
        "Europe/Madrid",
        "Europe/Moscow",
        "Asia/Tokyo",
        "Asia/Seoul",
        "Asia/Shanghai",
        "Asia/Singapore",
        "Asia/Kolkata",
        "Asia/Dubai",
        "Australia/Sydney",
        "Pacific/Auckland",
    ]
}

/// Suggest similar timezone for invalid input
pub fn suggest_timezone(invalid: &str) -> Vec<&'static str> {
    let invalid_lower = invalid.to_lowercase();

    // Simple fuzzy matching on the full name and on city names
    let mut matches: Vec<_> = get_common_timezones()
        .into_iter()
        .filter(|tz| {
            let tz_lower = tz.to_lowercase();
            tz_lower.contains(&invalid_lower)
                || invalid_lower.contains(&tz_lower)
                || tz.split('/').any(|part| part.to_lowercase().contains(&invalid_lower))
        })
        .collect();

    matches.truncate(5);
    matches
}

/// Resolve user input (IANA name or common abbreviation) to a zone
pub fn resolve_timezone(input: &str) -> Result<Tz, CalendarError> {
    if let Ok(tz) = parse_timezone(input) {
        return Ok(tz);
    }

    let normalized = match input.trim().to_lowercase().as_str() {
        "est" | "eastern" => "America/New_York",
        "cst" | "central" => "America/Chicago",
        "mst" | "mountain" => "America/Denver",
        "pst" | "pacific" => "America/Los_Angeles",
        "gmt" | "utc" | "z" => "UTC",
        "bst" | "london" => "Europe/London",
        "cet" | "paris" => "Europe/Paris",
        "jst" | "tokyo" => "Asia/Tokyo",
        _ => {
            let suggestions = suggest_timezone(input);
            return Err(if suggestions.is_empty() {
                CalendarError::InvalidTimezone(format!(
                    "Unknown timezone '{}'. Use IANA names like 'America/New_York'",
                    input
                ))
            } else {
                CalendarError::InvalidTimezone(format!(
                    "Unknown timezone '{}'. Did you mean: {}?",
                    input,
                    suggestions.join(", ")
                ))
            });
        }
    };

    parse_timezone(normalized)
}
