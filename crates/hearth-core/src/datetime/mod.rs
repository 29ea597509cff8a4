//! German date and time strings for the panel's clock widgets.
//!
//! All formatters write into fixed-capacity [`heapless::String`]s sized for
//! the widest possible `i32` fields, so formatting never allocates or
//! truncates. Field values are not range checked here; the real-time clock
//! is expected to deliver valid calendar values. Weekday and month names
//! degrade to [`PLACEHOLDER`] when out of range.

mod fields;

pub use fields::*;

use core::fmt::Write;

/// Shown in place of an out-of-range weekday or month name.
pub const PLACEHOLDER: &str = "---";

/// Capacity of formatted date strings.
pub const DATE_CAPACITY: usize = 64;

/// Capacity of formatted time strings.
pub const TIME_CAPACITY: usize = 40;

pub type DateString = heapless::String<DATE_CAPACITY>;
pub type TimeString = heapless::String<TIME_CAPACITY>;

/// Weekday names, Sunday first.
const WEEKDAYS: [&str; 7] = [
    "Sonntag",
    "Montag",
    "Dienstag",
    "Mittwoch",
    "Donnerstag",
    "Freitag",
    "Samstag",
];

const MONTHS: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// German weekday name, where 1 is Sunday and 7 is Saturday.
pub const fn weekday_name(day_of_week: i32) -> &'static str {
    match day_of_week {
        1..=7 => WEEKDAYS[(day_of_week - 1) as usize],
        _ => PLACEHOLDER,
    }
}

/// German month name, where 1 is January.
pub const fn month_name(month: i32) -> &'static str {
    match month {
        1..=12 => MONTHS[(month - 1) as usize],
        _ => PLACEHOLDER,
    }
}

/// Format as "Montag, 15. März 2026".
pub fn format_date_full(day_of_week: i32, day: i32, month: i32, year: i32) -> DateString {
    let mut out = DateString::new();
    let _ = write!(
        out,
        "{}, {}. {} {}",
        weekday_name(day_of_week),
        day,
        month_name(month),
        year
    );
    out
}

/// Format as "15. März 2026".
pub fn format_date_short(day: i32, month: i32, year: i32) -> DateString {
    let mut out = DateString::new();
    let _ = write!(out, "{}. {} {}", day, month_name(month), year);
    out
}

/// Format as "15.03.2026".
pub fn format_date_numeric(day: i32, month: i32, year: i32) -> DateString {
    let mut out = DateString::new();
    let _ = write!(out, "{:02}.{:02}.{}", day, month, year);
    out
}

/// Format as "22:45 Uhr".
pub fn format_time_24h(hour: i32, minute: i32) -> TimeString {
    let mut out = TimeString::new();
    let _ = write!(out, "{:02}:{:02} Uhr", hour, minute);
    out
}

/// Format as "22:45".
pub fn format_time_simple(hour: i32, minute: i32) -> TimeString {
    let mut out = TimeString::new();
    let _ = write!(out, "{:02}:{:02}", hour, minute);
    out
}

/// Format as "22:45:30".
pub fn format_time_with_seconds(hour: i32, minute: i32, second: i32) -> TimeString {
    let mut out = TimeString::new();
    let _ = write!(out, "{:02}:{:02}:{:02}", hour, minute, second);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_names() {
        assert_eq!(weekday_name(1), "Sonntag");
        assert_eq!(weekday_name(2), "Montag");
        assert_eq!(weekday_name(5), "Donnerstag");
        assert_eq!(weekday_name(7), "Samstag");
        assert_eq!(weekday_name(0), "---");
        assert_eq!(weekday_name(8), "---");
        assert_eq!(weekday_name(i32::MIN), "---");
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(1), "Januar");
        assert_eq!(month_name(3), "März");
        assert_eq!(month_name(12), "Dezember");
        assert_eq!(month_name(0), "---");
        assert_eq!(month_name(13), "---");
        assert_eq!(month_name(-1), "---");
    }

    #[test]
    fn test_format_date_full() {
        assert_eq!(format_date_full(2, 15, 3, 2026), "Montag, 15. März 2026");
        assert_eq!(format_date_full(9, 1, 13, 2026), "---, 1. --- 2026");
    }

    #[test]
    fn test_format_date_short() {
        assert_eq!(format_date_short(15, 3, 2026), "15. März 2026");
        assert_eq!(format_date_short(1, 10, 2025), "1. Oktober 2025");
    }

    #[test]
    fn test_format_date_numeric() {
        assert_eq!(format_date_numeric(5, 3, 2026), "05.03.2026");
        assert_eq!(format_date_numeric(31, 12, 999), "31.12.999");
    }

    #[test]
    fn test_format_times() {
        assert_eq!(format_time_24h(22, 45), "22:45 Uhr");
        assert_eq!(format_time_24h(7, 5), "07:05 Uhr");
        assert_eq!(format_time_simple(0, 0), "00:00");
        assert_eq!(format_time_with_seconds(22, 45, 30), "22:45:30");
        assert_eq!(format_time_with_seconds(1, 2, 3), "01:02:03");
    }

    #[test]
    fn test_negative_fields_keep_sign() {
        assert_eq!(format_time_simple(-5, 7), "-5:07");
    }

    #[test]
    fn test_extreme_fields_are_not_truncated() {
        let min = i32::MIN;
        assert_eq!(
            format_date_full(5, min, 9, min),
            "Donnerstag, -2147483648. September -2147483648"
        );
        assert_eq!(
            format_date_numeric(min, min, min),
            "-2147483648.-2147483648.-2147483648"
        );
        assert_eq!(
            format_time_with_seconds(min, min, min),
            "-2147483648:-2147483648:-2147483648"
        );
        assert_eq!(format_time_24h(min, min), "-2147483648:-2147483648 Uhr");
    }
}
