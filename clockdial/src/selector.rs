//! The time-selection state machine.
//!
//! ## Usage
//!
//! A [`TimeSelectorController`] owns the 12-hour display state for one
//! opening of the dial: the hour/minute numerals, the AM/PM period, which
//! unit is being edited, and the in-progress text buffers behind the two
//! numeric fields. The canonical 24-hour value is only reconstructed when
//! the session commits; interim edits never leak out.

use tracing::trace;

use crate::time_value::{DayPeriod, TimeValue};

/// Which dial unit is currently subject to numeral or text editing.
///
/// The hour and minute rings are mutually exclusive; exactly one of them is
/// interactive while the selector is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionUnit {
    /// The hour ring (numerals 1-12).
    Hour,
    /// The minute ring (numerals at 5-minute increments).
    Minute,
}

/// Display state and transition logic for one opening of the time dial.
///
/// The controller keeps two representations per unit: the numeric field that
/// drives the dial (always valid) and a text buffer that tracks in-progress
/// typing (possibly empty or unpadded mid-edit). Reconciliation is
/// one-directional: text flows into the numeric field on every accepted
/// digit, and the numeric field flows back into the text on blur and on
/// seeding. Every transition is total; out-of-domain input is rejected
/// without panicking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSelectorController {
    display_hour: u8,
    period: DayPeriod,
    minute: u8,
    active_unit: SelectionUnit,
    hour_text: String,
    minute_text: String,
    hour_editing: bool,
    minute_editing: bool,
}

impl TimeSelectorController {
    /// Creates a controller seeded from a host-supplied value.
    ///
    /// With no value the dial starts at midnight (12 AM, minute 0). Editing
    /// starts on the hour ring unless the caller explicitly signals that a
    /// minute was already chosen in a previous session.
    pub fn new(initial: Option<TimeValue>, minute_chosen: bool) -> Self {
        let value = initial.unwrap_or(TimeValue::MIDNIGHT);
        let display_hour = value.display_hour();
        let minute = value.minute();
        Self {
            display_hour,
            period: value.period(),
            minute,
            active_unit: if minute_chosen {
                SelectionUnit::Minute
            } else {
                SelectionUnit::Hour
            },
            hour_text: format_two_digit(display_hour),
            minute_text: format_two_digit(minute),
            hour_editing: false,
            minute_editing: false,
        }
    }

    /// Returns the hour shown on the dial (1-12).
    pub fn display_hour(&self) -> u8 {
        self.display_hour
    }

    /// Returns the selected minute (0-59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns the current AM/PM period.
    pub fn period(&self) -> DayPeriod {
        self.period
    }

    /// Returns the unit currently being edited.
    pub fn active_unit(&self) -> SelectionUnit {
        self.active_unit
    }

    /// Returns the in-progress text behind a unit's numeric field.
    ///
    /// May legitimately be empty or unpadded mid-edit; it settles back to the
    /// zero-padded numeric value on blur.
    pub fn field_text(&self, unit: SelectionUnit) -> &str {
        match unit {
            SelectionUnit::Hour => &self.hour_text,
            SelectionUnit::Minute => &self.minute_text,
        }
    }

    /// Returns whether a unit's field is currently being typed into.
    pub fn is_editing(&self, unit: SelectionUnit) -> bool {
        match unit {
            SelectionUnit::Hour => self.hour_editing,
            SelectionUnit::Minute => self.minute_editing,
        }
    }

    /// Picks an hour numeral from the dial and moves on to minute editing.
    ///
    /// Values outside 1-12 are rejected.
    pub fn select_hour_numeral(&mut self, hour: u8) {
        if !(1..=12).contains(&hour) {
            trace!(hour, "rejected hour numeral outside dial");
            return;
        }
        self.display_hour = hour;
        self.hour_text = format_two_digit(hour);
        self.active_unit = SelectionUnit::Minute;
    }

    /// Picks a minute value from the dial.
    ///
    /// Values outside 0-59 are rejected. Stays on the minute ring; commit is
    /// always an explicit separate action.
    pub fn select_minute_numeral(&mut self, minute: u8) {
        if minute > 59 {
            trace!(minute, "rejected minute numeral outside dial");
            return;
        }
        self.minute = minute;
        self.minute_text = format_two_digit(minute);
    }

    /// Sets the AM/PM period.
    ///
    /// A pure display-field edit: the canonical value is not recomputed until
    /// commit, and the active unit is untouched.
    pub fn set_period(&mut self, period: DayPeriod) {
        self.period = period;
    }

    /// Moves editing to another unit without altering any numeric field.
    pub fn switch_unit(&mut self, unit: SelectionUnit) {
        self.active_unit = unit;
    }

    /// Appends a typed character to a unit's text buffer.
    ///
    /// Acceptance is decided character-by-character so the field can never
    /// transiently display an out-of-range number: the widened buffer must
    /// stay within two characters and parse into the unit's window (1-12 for
    /// hours, 0-59 for minutes). On acceptance the numeric field is updated
    /// immediately so the dial tracks typing. Returns whether the character
    /// was accepted.
    pub fn type_digit(&mut self, unit: SelectionUnit, ch: char) -> bool {
        if !ch.is_ascii_digit() {
            trace!(%ch, "rejected non-digit input");
            return false;
        }
        let buffer = self.field_text(unit);
        if buffer.len() >= 2 {
            return false;
        }
        let mut widened = buffer.to_string();
        widened.push(ch);
        let Ok(value) = widened.parse::<u8>() else {
            return false;
        };
        let in_window = match unit {
            SelectionUnit::Hour => (1..=12).contains(&value),
            SelectionUnit::Minute => value <= 59,
        };
        if !in_window {
            trace!(%widened, "rejected digit exceeding field window");
            return false;
        }
        match unit {
            SelectionUnit::Hour => {
                self.hour_text = widened;
                self.display_hour = value;
            }
            SelectionUnit::Minute => {
                self.minute_text = widened;
                self.minute = value;
            }
        }
        true
    }

    /// Empties a unit's text buffer.
    ///
    /// The numeric field keeps its last valid value, so blurring without
    /// further input restores a valid numeral.
    pub fn clear_field(&mut self, unit: SelectionUnit) {
        match unit {
            SelectionUnit::Hour => self.hour_text.clear(),
            SelectionUnit::Minute => self.minute_text.clear(),
        }
    }

    /// Marks a unit's field as being typed into.
    pub fn focus_field(&mut self, unit: SelectionUnit) {
        match unit {
            SelectionUnit::Hour => self.hour_editing = true,
            SelectionUnit::Minute => self.minute_editing = true,
        }
    }

    /// Ends typing on a unit's field and settles its text.
    ///
    /// An emptied buffer is restored from the numeric field; transient
    /// unpadded input like "9" is normalized back to "09". Either way the
    /// numeric field already holds the last accepted value, so rendering it
    /// zero-padded covers both cases.
    pub fn blur_field(&mut self, unit: SelectionUnit) {
        match unit {
            SelectionUnit::Hour => {
                self.hour_editing = false;
                self.hour_text = format_two_digit(self.display_hour);
            }
            SelectionUnit::Minute => {
                self.minute_editing = false;
                self.minute_text = format_two_digit(self.minute);
            }
        }
    }

    /// Reconstructs the canonical 24-hour value from the display fields.
    ///
    /// Pure; the session calls this exactly once, on commit.
    pub fn committed_value(&self) -> TimeValue {
        TimeValue::from_display(self.display_hour, self.period, self.minute)
            .expect("controller keeps display fields in range")
    }
}

impl Default for TimeSelectorController {
    fn default() -> Self {
        Self::new(None, false)
    }
}

fn format_two_digit(value: u8) -> String {
    format!("{value:02}")
}
