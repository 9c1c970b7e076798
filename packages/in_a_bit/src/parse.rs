use std::time::Duration;

use crate::Error;

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3600.0;
const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_WEEK: f64 = 604_800.0;

// Calendar years average out to 365.25 days.
const SECONDS_PER_YEAR: f64 = 365.25 * SECONDS_PER_DAY;

/// Parses a [duration string][crate] into a [`Duration`].
///
/// The input is a number followed by an optional time unit, e.g. `100ms`,
/// `1.5s`, `2 min` or `90s`. A bare number means milliseconds. Fractional
/// values are accepted; whitespace around and between the number and the
/// unit is ignored, and units are case-insensitive.
///
/// See [package-level documentation][crate] for the unit table.
///
/// # Errors
///
/// Returns [`Error::InvalidDuration`] when the input is empty, the numeric
/// part does not parse, the value is negative or not finite, the unit is
/// unknown, or the resulting duration is unrepresentable.
pub fn parse(text: &str) -> crate::Result<Duration> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Err(Error::new(text, "duration string is empty"));
    }

    let unit_start = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '+' || c == '-'))
        .unwrap_or(trimmed.len());
    let (value_part, unit_part) = trimmed.split_at(unit_start);

    let value = value_part
        .parse::<f64>()
        .map_err(|_| Error::new(value_part, "numeric part could not be parsed as a number"))?;

    if !value.is_finite() {
        return Err(Error::new(value_part, "numeric part is not finite"));
    }

    if value < 0.0 {
        return Err(Error::new(trimmed, "durations cannot be negative"));
    }

    let seconds_per_unit = seconds_per_unit(unit_part.trim())
        .ok_or_else(|| Error::new(unit_part.trim(), "unknown time unit"))?;

    Duration::try_from_secs_f64(value * seconds_per_unit)
        .map_err(|_| Error::new(trimmed, "duration is too large to represent"))
}

/// Seconds per unit for every recognized unit spelling, or `None` for an
/// unknown unit. The empty unit means the number is in milliseconds.
fn seconds_per_unit(unit: &str) -> Option<f64> {
    match unit.to_ascii_lowercase().as_str() {
        "" | "ms" | "msec" | "msecs" | "millisecond" | "milliseconds" => Some(0.001),
        "s" | "sec" | "secs" | "second" | "seconds" => Some(1.0),
        "m" | "min" | "mins" | "minute" | "minutes" => Some(SECONDS_PER_MINUTE),
        "h" | "hr" | "hrs" | "hour" | "hours" => Some(SECONDS_PER_HOUR),
        "d" | "day" | "days" => Some(SECONDS_PER_DAY),
        "w" | "week" | "weeks" => Some(SECONDS_PER_WEEK),
        "y" | "yr" | "yrs" | "year" | "years" => Some(SECONDS_PER_YEAR),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_smoke_test() {
        assert_eq!(parse("100ms").unwrap(), Duration::from_millis(100));
        assert_eq!(parse("1.5s").unwrap(), Duration::from_millis(1500));
        assert_eq!(parse("2m").unwrap(), Duration::from_secs(120));
        assert_eq!(parse("1h").unwrap(), Duration::from_secs(3600));
        assert_eq!(parse("1d").unwrap(), Duration::from_secs(86_400));
        assert_eq!(parse("2w").unwrap(), Duration::from_secs(1_209_600));
    }

    #[test]
    fn bare_number_means_milliseconds() {
        assert_eq!(parse("250").unwrap(), Duration::from_millis(250));
        assert_eq!(parse("0").unwrap(), Duration::ZERO);
        assert_eq!(parse("0.5").unwrap(), Duration::from_micros(500));
    }

    #[test]
    fn whitespace_is_ignored() {
        assert_eq!(parse("  90 s  ").unwrap(), Duration::from_secs(90));
        assert_eq!(parse("10 minutes").unwrap(), Duration::from_secs(600));
    }

    #[test]
    fn units_are_case_insensitive() {
        assert_eq!(parse("5 Sec").unwrap(), Duration::from_secs(5));
        assert_eq!(parse("100MS").unwrap(), Duration::from_millis(100));
        assert_eq!(parse("1 Hour").unwrap(), Duration::from_secs(3600));
    }

    #[test]
    fn long_unit_spellings_parse() {
        assert_eq!(parse("3 seconds").unwrap(), Duration::from_secs(3));
        assert_eq!(parse("1 millisecond").unwrap(), Duration::from_millis(1));
        assert_eq!(parse("2 days").unwrap(), Duration::from_secs(172_800));
    }

    #[test]
    fn years_average_the_calendar() {
        assert_eq!(parse("1y").unwrap(), Duration::from_secs(31_557_600));
    }

    #[test]
    fn negative_is_error() {
        parse("-5ms").unwrap_err();
        parse("-0.1s").unwrap_err();
    }

    #[test]
    fn garbage_is_error() {
        parse("").unwrap_err();
        parse("   ").unwrap_err();
        parse("fast").unwrap_err();
        parse("5 fortnights").unwrap_err();
        parse("1.2.3s").unwrap_err();
        parse("..5").unwrap_err();
    }

    #[test]
    fn unrepresentable_magnitude_is_error() {
        parse("999999999999999999999y").unwrap_err();
    }
}
