//! Calendar fields as delivered by a clock, and the styles they render in.

use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

use super::{
    DateString, TimeString, format_date_full, format_date_numeric, format_date_short,
    format_time_24h, format_time_simple, format_time_with_seconds,
};

/// How the date line of the clock widget is rendered.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// "Montag, 15. März 2026"
    #[default]
    Full,
    /// "15. März 2026"
    Short,
    /// "15.03.2026"
    Numeric,
}

impl DateStyle {
    pub const ALL: [Self; 3] = [Self::Full, Self::Short, Self::Numeric];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Short => "short",
            Self::Numeric => "numeric",
        }
    }
}

/// How the time line of the clock widget is rendered.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeStyle {
    /// "22:45 Uhr"
    #[default]
    Clock,
    /// "22:45"
    Simple,
    /// "22:45:30"
    WithSeconds,
}

impl TimeStyle {
    pub const ALL: [Self; 3] = [Self::Clock, Self::Simple, Self::WithSeconds];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Clock => "clock",
            Self::Simple => "simple",
            Self::WithSeconds => "seconds",
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeError {
    #[error("month {0} is outside 1-12")]
    Month(i32),
    #[error("day {0} is outside 1-31")]
    Day(i32),
    #[error("weekday {0} is outside 1-7")]
    Weekday(i32),
    #[error("hour {0} is outside 0-23")]
    Hour(i32),
    #[error("minute {0} is outside 0-59")]
    Minute(i32),
    #[error("second {0} is outside 0-59")]
    Second(i32),
}

/// Date and time fields as read from a real-time clock.
///
/// `day_of_week` counts from Sunday (1) to Saturday (7). The fields are
/// public and unchecked; use [`DateTimeFields::new`] to validate ranges.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateTimeFields {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub day_of_week: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
}

impl DateTimeFields {
    /// Create fields, rejecting values outside their calendar range.
    pub fn new(
        year: i32,
        month: i32,
        day: i32,
        day_of_week: i32,
        hour: i32,
        minute: i32,
        second: i32,
    ) -> Result<Self, DateTimeError> {
        if !(1..=12).contains(&month) {
            return Err(DateTimeError::Month(month));
        }
        if !(1..=31).contains(&day) {
            return Err(DateTimeError::Day(day));
        }
        if !(1..=7).contains(&day_of_week) {
            return Err(DateTimeError::Weekday(day_of_week));
        }
        if !(0..=23).contains(&hour) {
            return Err(DateTimeError::Hour(hour));
        }
        if !(0..=59).contains(&minute) {
            return Err(DateTimeError::Minute(minute));
        }
        if !(0..=59).contains(&second) {
            return Err(DateTimeError::Second(second));
        }

        Ok(Self {
            year,
            month,
            day,
            day_of_week,
            hour,
            minute,
            second,
        })
    }

    pub fn format_date(&self, style: DateStyle) -> DateString {
        match style {
            DateStyle::Full => format_date_full(self.day_of_week, self.day, self.month, self.year),
            DateStyle::Short => format_date_short(self.day, self.month, self.year),
            DateStyle::Numeric => format_date_numeric(self.day, self.month, self.year),
        }
    }

    pub fn format_time(&self, style: TimeStyle) -> TimeString {
        match style {
            TimeStyle::Clock => format_time_24h(self.hour, self.minute),
            TimeStyle::Simple => format_time_simple(self.hour, self.minute),
            TimeStyle::WithSeconds => format_time_with_seconds(self.hour, self.minute, self.second),
        }
    }
}

/// Source of the current wall-clock time.
///
/// Implemented over the RTC peripheral on the panel and over the host clock
/// in the desktop preview.
pub trait TimeSource {
    fn now(&self) -> DateTimeFields;
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    /// Clock that always reports the same instant.
    struct FixedClock(DateTimeFields);

    impl TimeSource for FixedClock {
        fn now(&self) -> DateTimeFields {
            self.0
        }
    }

    fn sample() -> DateTimeFields {
        DateTimeFields::new(2026, 3, 15, 1, 22, 45, 30).unwrap()
    }

    #[test]
    fn test_new_accepts_valid_fields() {
        let fields = sample();
        assert_eq!(fields.year, 2026);
        assert_eq!(fields.day_of_week, 1);
        assert_eq!(fields.second, 30);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(
            DateTimeFields::new(2026, 13, 1, 1, 0, 0, 0),
            Err(DateTimeError::Month(13))
        );
        assert_eq!(
            DateTimeFields::new(2026, 1, 0, 1, 0, 0, 0),
            Err(DateTimeError::Day(0))
        );
        assert_eq!(
            DateTimeFields::new(2026, 1, 1, 8, 0, 0, 0),
            Err(DateTimeError::Weekday(8))
        );
        assert_eq!(
            DateTimeFields::new(2026, 1, 1, 1, 24, 0, 0),
            Err(DateTimeError::Hour(24))
        );
        assert_eq!(
            DateTimeFields::new(2026, 1, 1, 1, 0, 60, 0),
            Err(DateTimeError::Minute(60))
        );
        assert_eq!(
            DateTimeFields::new(2026, 1, 1, 1, 0, 0, -1),
            Err(DateTimeError::Second(-1))
        );
    }

    #[test]
    fn test_format_date_styles() {
        let fields = sample();
        assert_eq!(fields.format_date(DateStyle::Full), "Sonntag, 15. März 2026");
        assert_eq!(fields.format_date(DateStyle::Short), "15. März 2026");
        assert_eq!(fields.format_date(DateStyle::Numeric), "15.03.2026");
    }

    #[test]
    fn test_format_time_styles() {
        let fields = sample();
        assert_eq!(fields.format_time(TimeStyle::Clock), "22:45 Uhr");
        assert_eq!(fields.format_time(TimeStyle::Simple), "22:45");
        assert_eq!(fields.format_time(TimeStyle::WithSeconds), "22:45:30");
    }

    #[test]
    fn test_unchecked_fields_use_placeholder() {
        let fields = DateTimeFields {
            day_of_week: 0,
            month: 0,
            day: 1,
            year: 2026,
            ..Default::default()
        };
        assert_eq!(fields.format_date(DateStyle::Full), "---, 1. --- 2026");
    }

    #[test]
    fn test_time_source() {
        let clock = FixedClock(sample());
        assert_eq!(clock.now().format_time(TimeStyle::Simple), "22:45");
    }

    #[test]
    fn test_style_defaults_and_labels() {
        assert_eq!(DateStyle::default(), DateStyle::Full);
        assert_eq!(TimeStyle::default(), TimeStyle::Clock);
        assert_eq!(TimeStyle::WithSeconds.label(), "seconds");
        assert_eq!(DateStyle::ALL.len(), 3);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", DateTimeError::Hour(24)),
            "hour 24 is outside 0-23"
        );
    }
}
