//! Check-in time parsing.
//!
//! Attendance devices and manual entry produce check-in times in several
//! shapes ("08:30 AM", "8:30pm", "08:30", "Checked in 08:30 AM"). This module
//! extracts the first clock time found in such a string and converts it to
//! minutes since midnight.

use std::sync::LazyLock;

use chrono::{NaiveTime, Timelike};
use regex::Regex;

static CLOCK_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]{1,2}):([0-9]{2})\s*(AM|PM)?").expect("clock time pattern is valid")
});

/// Extracts a clock time from `time` as minutes since midnight.
///
/// The string is searched rather than matched whole, so surrounding text is
/// ignored. A trailing `AM`/`PM` (any case) switches to 12-hour reading:
/// `12 AM` is midnight and `PM` adds twelve hours to any hour but 12.
/// Without a meridiem the hour is read as 24-hour time.
///
/// Returns `None` when no clock time is present or the converted time is not
/// a valid time of day. Out-of-range values such as `25:10` or `13:00 PM` are
/// rejected rather than converted to 1510 or 1500, so every result lies in
/// `0..=1439`.
///
/// # Examples
///
/// ```
/// use late_deduction_engine::calculation::try_parse_time_to_minutes;
///
/// assert_eq!(try_parse_time_to_minutes("08:30 AM"), Some(510));
/// assert_eq!(try_parse_time_to_minutes("1:05pm"), Some(785));
/// assert_eq!(try_parse_time_to_minutes("12:00 AM"), Some(0));
/// assert_eq!(try_parse_time_to_minutes("not recorded"), None);
/// ```
pub fn try_parse_time_to_minutes(time: &str) -> Option<u32> {
    let captures = CLOCK_TIME.captures(time)?;
    let mut hours: u32 = captures[1].parse().ok()?;
    let minutes: u32 = captures[2].parse().ok()?;

    if let Some(meridiem) = captures.get(3) {
        let is_pm = meridiem.as_str().eq_ignore_ascii_case("PM");
        if is_pm && hours != 12 {
            hours += 12;
        } else if !is_pm && hours == 12 {
            hours = 0;
        }
    }

    let clock = NaiveTime::from_hms_opt(hours, minutes, 0)?;
    Some(clock.num_seconds_from_midnight() / 60)
}

/// Extracts a clock time from `time` as minutes since midnight, or 0.
///
/// This is the lenient form used by the deduction calculations: anything
/// [`try_parse_time_to_minutes`] rejects reads as midnight. A malformed time
/// therefore cannot be told apart from a genuine `00:00` check-in.
///
/// # Examples
///
/// ```
/// use late_deduction_engine::calculation::parse_time_to_minutes;
///
/// assert_eq!(parse_time_to_minutes("08:45 AM"), 525);
/// assert_eq!(parse_time_to_minutes("17:20"), 1040);
/// assert_eq!(parse_time_to_minutes(""), 0);
/// ```
pub fn parse_time_to_minutes(time: &str) -> u32 {
    try_parse_time_to_minutes(time).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_morning_time_with_meridiem() {
        assert_eq!(parse_time_to_minutes("08:30 AM"), 510);
    }

    #[test]
    fn test_parses_afternoon_time_with_meridiem() {
        assert_eq!(parse_time_to_minutes("02:15 PM"), 855);
    }

    #[test]
    fn test_meridiem_is_case_insensitive() {
        assert_eq!(parse_time_to_minutes("02:15 pm"), 855);
        assert_eq!(parse_time_to_minutes("02:15Pm"), 855);
    }

    #[test]
    fn test_noon_and_midnight() {
        assert_eq!(parse_time_to_minutes("12:00 PM"), 720);
        assert_eq!(parse_time_to_minutes("12:30 AM"), 30);
        assert_eq!(try_parse_time_to_minutes("12:00 AM"), Some(0));
    }

    #[test]
    fn test_single_digit_hour() {
        assert_eq!(parse_time_to_minutes("8:05 AM"), 485);
    }

    #[test]
    fn test_without_meridiem_reads_24_hour() {
        assert_eq!(parse_time_to_minutes("08:30"), 510);
        assert_eq!(parse_time_to_minutes("17:45"), 1065);
        assert_eq!(parse_time_to_minutes("23:59"), 1439);
    }

    #[test]
    fn test_time_is_found_inside_text() {
        assert_eq!(parse_time_to_minutes("Checked in at 09:10 AM via device 3"), 550);
        assert_eq!(parse_time_to_minutes("2026-03-02T08:47:00"), 527);
    }

    #[test]
    fn test_unparsable_input_falls_back_to_zero() {
        assert_eq!(parse_time_to_minutes(""), 0);
        assert_eq!(parse_time_to_minutes("late"), 0);
        assert_eq!(parse_time_to_minutes("0830"), 0);
        assert_eq!(try_parse_time_to_minutes("late"), None);
    }

    #[test]
    fn test_out_of_range_clock_values_are_malformed() {
        assert_eq!(try_parse_time_to_minutes("25:10"), None);
        assert_eq!(try_parse_time_to_minutes("09:75"), None);
        assert_eq!(try_parse_time_to_minutes("13:00 PM"), None);
        assert_eq!(parse_time_to_minutes("25:10"), 0);
    }

    #[test]
    fn test_midnight_and_malformed_share_legacy_value() {
        assert_eq!(parse_time_to_minutes("00:00"), parse_time_to_minutes("n/a"));
        assert_eq!(try_parse_time_to_minutes("00:00"), Some(0));
        assert_eq!(try_parse_time_to_minutes("n/a"), None);
    }
}
