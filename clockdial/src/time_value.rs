//! Canonical 24-hour time values.
//!
//! ## Usage
//!
//! [`TimeValue`] is the only time representation that crosses the component
//! boundary; the 12-hour fields used while the dial is open are derived from
//! it and folded back into it on commit.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Indicates whether a 12-hour display value is in AM or PM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPeriod {
    /// Ante meridiem (before noon).
    Am,
    /// Post meridiem (after noon).
    Pm,
}

/// Errors produced when constructing or parsing a [`TimeValue`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeValueError {
    /// Hour outside 0..=23.
    #[error("hour out of range: {0} (expected 0-23)")]
    HourOutOfRange(u8),
    /// Minute outside 0..=59.
    #[error("minute out of range: {0} (expected 0-59)")]
    MinuteOutOfRange(u8),
    /// 12-hour display hour outside 1..=12.
    #[error("display hour out of range: {0} (expected 1-12)")]
    DisplayHourOutOfRange(u8),
    /// Input did not match the `"HH:MM"` shape.
    #[error("malformed time literal {0:?} (expected \"HH:MM\")")]
    Malformed(String),
}

/// A canonical 24-hour clock time: hour 0..=23, minute 0..=59.
///
/// Immutable once constructed. The textual form is zero-padded 24-hour
/// `"HH:MM"`, which is also what [`FromStr`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeValue {
    hour: u8,
    minute: u8,
}

impl TimeValue {
    /// Midnight, the default when a host opens the picker with no value.
    pub const MIDNIGHT: TimeValue = TimeValue { hour: 0, minute: 0 };

    /// Creates a time value, rejecting out-of-range fields.
    pub fn new(hour: u8, minute: u8) -> Result<Self, TimeValueError> {
        if hour > 23 {
            return Err(TimeValueError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(TimeValueError::MinuteOutOfRange(minute));
        }
        Ok(Self { hour, minute })
    }

    /// Returns the hour in 24-hour form (0-23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns the hour to display on a 12-hour dial (1-12).
    ///
    /// Midnight and noon both display as 12; [`period`](Self::period)
    /// disambiguates them.
    pub fn display_hour(&self) -> u8 {
        let hour = self.hour % 12;
        if hour == 0 { 12 } else { hour }
    }

    /// Returns the period for a 12-hour dial.
    pub fn period(&self) -> DayPeriod {
        if self.hour >= 12 {
            DayPeriod::Pm
        } else {
            DayPeriod::Am
        }
    }

    /// Reconstructs a canonical value from 12-hour display fields.
    ///
    /// 12 AM maps to hour 0 and 12 PM to hour 12; every other PM hour is the
    /// display hour plus twelve. This is the inverse of
    /// [`display_hour`](Self::display_hour) / [`period`](Self::period).
    pub fn from_display(
        display_hour: u8,
        period: DayPeriod,
        minute: u8,
    ) -> Result<Self, TimeValueError> {
        if !(1..=12).contains(&display_hour) {
            return Err(TimeValueError::DisplayHourOutOfRange(display_hour));
        }
        let hour = match (display_hour, period) {
            (12, DayPeriod::Am) => 0,
            (12, DayPeriod::Pm) => 12,
            (h, DayPeriod::Am) => h,
            (h, DayPeriod::Pm) => h + 12,
        };
        Self::new(hour, minute)
    }
}

impl Default for TimeValue {
    fn default() -> Self {
        Self::MIDNIGHT
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeValue {
    type Err = TimeValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TimeValueError::Malformed(s.to_string());
        let (hour_text, minute_text) = s.split_once(':').ok_or_else(|| malformed())?;
        if hour_text.len() != 2 || minute_text.len() != 2 {
            return Err(malformed());
        }
        let hour: u8 = hour_text.parse().map_err(|_| malformed())?;
        let minute: u8 = minute_text.parse().map_err(|_| malformed())?;
        Self::new(hour, minute)
    }
}
