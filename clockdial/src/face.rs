//! Clock-face geometry.
//!
//! Pure functions from the current display state to numeral placement and
//! hand angles. Angles are in degrees, measured clockwise from the 3 o'clock
//! position with a -90 degree origin correction so 12 sits at the top; all
//! results are normalized into `[0, 360)`. Drawing is left to the host.

use smallvec::SmallVec;

use crate::selector::SelectionUnit;

/// Degrees between adjacent numerals on either ring (12 slots).
const RING_STEP_DEGREES: f32 = 30.0;

/// One numeral slot on the dial.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceNumeral {
    /// Text to draw at the slot ("1".."12" or "00","05",..,"55").
    pub label: String,
    /// Clockwise angle of the slot in degrees, 12 o'clock at 270.
    pub angle_degrees: f32,
    /// Whether this slot matches the current field value.
    pub selected: bool,
}

/// Everything a renderer needs to draw one frame of the dial.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceLayout {
    /// Numerals of the ring matching the active unit; the other ring is not
    /// produced at all, the two are mutually exclusive.
    pub numerals: SmallVec<[FaceNumeral; 12]>,
    /// Angle of the hour hand in degrees.
    pub hour_hand_degrees: f32,
    /// Angle of the minute hand in degrees.
    pub minute_hand_degrees: f32,
}

impl FaceLayout {
    /// Computes the full face layout for the current display state.
    pub fn compute(active_unit: SelectionUnit, display_hour: u8, minute: u8) -> Self {
        Self {
            numerals: face_numerals(active_unit, display_hour, minute),
            hour_hand_degrees: hour_hand_degrees(display_hour, minute),
            minute_hand_degrees: minute_hand_degrees(minute),
        }
    }
}

/// Returns the numeral ring for the active unit.
///
/// The hour ring carries 1-12; the minute ring carries 0, 5, .., 55. A minute
/// off the 5-minute grid simply selects no numeral.
pub fn face_numerals(
    active_unit: SelectionUnit,
    display_hour: u8,
    minute: u8,
) -> SmallVec<[FaceNumeral; 12]> {
    match active_unit {
        SelectionUnit::Hour => (1..=12u8)
            .map(|hour| FaceNumeral {
                label: hour.to_string(),
                angle_degrees: normalize_degrees(f32::from(hour) * RING_STEP_DEGREES - 90.0),
                selected: hour == display_hour,
            })
            .collect(),
        SelectionUnit::Minute => (0..12u8)
            .map(|slot| {
                let value = slot * 5;
                FaceNumeral {
                    label: format!("{value:02}"),
                    angle_degrees: normalize_degrees(f32::from(value) * 6.0 - 90.0),
                    selected: value == minute,
                }
            })
            .collect(),
    }
}

/// Angle of the hour hand, drifting with the minute as on a real clock.
pub fn hour_hand_degrees(display_hour: u8, minute: u8) -> f32 {
    normalize_degrees(f32::from(display_hour) * 30.0 + f32::from(minute) * 0.5 - 90.0)
}

/// Angle of the minute hand.
pub fn minute_hand_degrees(minute: u8) -> f32 {
    normalize_degrees(f32::from(minute) * 6.0 - 90.0)
}

fn normalize_degrees(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}
